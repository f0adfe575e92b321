//! Property tests for the whitelist sanitizer.
//!
//! These validate the universal guarantees of the engine: inputs without
//! markup pass through untouched, banned attributes and schemes never reach
//! the output, and no input -- however malformed -- causes a panic.

use html_whitelist::{Overrides, Policy, Profile, WhiteList};
use proptest::prelude::*;

fn default_whitelist() -> WhiteList {
    WhiteList::new(Policy::from_profile(Profile::Default))
}

fn empty_whitelist() -> WhiteList {
    WhiteList::new(Policy::from_profile(Profile::Empty))
}

// Strategy: text with no `<`, i.e. no possible tag token
fn arb_plain_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^<]{0,64}").unwrap()
}

// Strategy: lowercase candidate tag names
fn arb_tag_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

proptest! {
    /// Property: input without `<` is returned unchanged.
    #[test]
    fn no_markup_means_identity(text in arb_plain_text()) {
        let whitelist = default_whitelist();
        prop_assert_eq!(whitelist.sanitize(&text), text);
    }

    /// Property: sanitization never panics, whatever the input.
    #[test]
    fn never_panics(text in any::<String>()) {
        let _ = default_whitelist().sanitize(&text);
        let _ = empty_whitelist().sanitize(&text);
    }

    /// Property: under the empty profile nothing is ever added -- every tag
    /// is unwrapped and no attributes survive, so output never grows.
    #[test]
    fn empty_profile_output_never_grows(text in any::<String>()) {
        let out = empty_whitelist().sanitize(&text);
        prop_assert!(out.len() <= text.len());
    }

    /// Property: content wrapped in an allowed tag round-trips.
    #[test]
    fn allowed_wrapper_round_trips(text in arb_plain_text()) {
        let whitelist = WhiteList::new(Policy::resolve(
            Profile::Empty,
            &Overrides { tags: vec!["b".into()], ..Overrides::default() },
        ));
        let html = format!("<b>{text}</b>");
        prop_assert_eq!(whitelist.sanitize(&html), html);
    }

    /// Property: a disallowed, non-bad wrapper is stripped but its content
    /// is kept.
    #[test]
    fn unknown_wrapper_is_unwrapped(name in arb_tag_name(), text in arb_plain_text()) {
        let whitelist = empty_whitelist();
        let html = format!("<{name}>{text}</{name}>");
        prop_assert_eq!(whitelist.sanitize(&html), text);
    }

    /// Property: an event-handler attribute never survives, whatever its
    /// value.
    #[test]
    fn onclick_never_survives(value in prop::string::string_regex("[^\"<]{0,32}").unwrap()) {
        let whitelist = default_whitelist();
        let html = format!(r#"<a href="/x" onclick="{value}">y</a>"#);
        prop_assert_eq!(whitelist.sanitize(&html), r#"<a href="/x">y</a>"#);
    }

    /// Property: an unknown URI scheme on href is always dropped while the
    /// tag survives.
    #[test]
    fn unknown_scheme_is_dropped(scheme in arb_tag_name()) {
        prop_assume!(!Policy::default().protocols().contains(&scheme));
        let whitelist = default_whitelist();
        let html = format!(r#"<a href="{scheme}:payload">x</a>"#);
        prop_assert_eq!(whitelist.sanitize(&html), "<a>x</a>");
    }

    /// Property: retained attribute values come out entity-escaped.
    #[test]
    fn retained_values_are_escaped(value in prop::string::string_regex("[^']{0,24}").unwrap()) {
        let whitelist = default_whitelist();
        let html = format!("<abbr title='{value}'>x</abbr>");
        let escaped = value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;");
        prop_assert_eq!(
            whitelist.sanitize(&html),
            format!(r#"<abbr title="{escaped}">x</abbr>"#)
        );
    }
}
