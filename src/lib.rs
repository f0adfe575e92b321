//! # html_whitelist
//!
//! A whitelist-based HTML sanitizer: untrusted markup is filtered against an
//! allowed set of tags, attributes, and URI protocols before it is stored or
//! rendered, so injected `<script>` elements and `javascript:` links never
//! survive.
//!
//! ## Overview
//!
//! The engine is a single-pass streaming filter, not an HTML parser: the
//! input is split into raw tag/text spans, each span is classified, and the
//! output is rebuilt token by token under a resolved [`Policy`]. It never
//! builds a DOM, never validates nesting, and never fails on malformed
//! markup -- anything unparseable passes through as literal text.
//!
//! Filtering rules, per token:
//!
//! - A tag whose name is in the policy's allowed tags is kept; its attributes
//!   are reduced to the allowed set, `href`/`src` values with disallowed URI
//!   schemes are dropped, and surviving values are entity-escaped.
//! - A tag with any other name is stripped. If the name is one of the
//!   policy's *bad tags* (e.g. `script`), all following content is deleted
//!   until the next allowed tag; otherwise only the tag markup itself is
//!   removed and its content is kept ("unwrapped").
//!
//! Policies are resolved from five built-in [`Profile`] presets plus caller
//! overrides, and are immutable afterwards -- share one across as many
//! threads as you like.
//!
//! ## Quick start
//!
//! ```rust
//! use html_whitelist::{Profile, WhiteListBuilder};
//!
//! let whitelist = WhiteListBuilder::new()
//!     .profile(Profile::Base)
//!     .tags(["blockquote"])
//!     .build();
//!
//! let clean = whitelist.sanitize(
//!     r#"<b>fine</b><script>alert(1)</script><a href="javascript:x">link</a>"#,
//! );
//! assert_eq!(clean, "<b>fine</b>link");
//! ```
//!
//! ## Sanitizing record fields
//!
//! Types that hold several untrusted string fields can implement
//! [`Sanitizable`] and be cleaned in one call, with `only`/`except` field
//! selection configured on the builder:
//!
//! ```rust
//! use html_whitelist::{Profile, Sanitizable, WhiteListBuilder};
//!
//! struct Comment {
//!     body: String,
//!     slug: String,
//! }
//!
//! impl Sanitizable for Comment {
//!     fn fields(&mut self) -> Vec<(&'static str, &mut String)> {
//!         vec![("body", &mut self.body), ("slug", &mut self.slug)]
//!     }
//! }
//!
//! let whitelist = WhiteListBuilder::new()
//!     .profile(Profile::Web)
//!     .except(["slug"])
//!     .build();
//!
//! let mut comment = Comment {
//!     body: "<ul><li>ok</li><script>alert(1)</script></ul>".into(),
//!     slug: "<raw>".into(),
//! };
//! whitelist.sanitize_fields(&mut comment);
//! assert_eq!(comment.body, "<ul><li>ok</li></ul>");
//! assert_eq!(comment.slug, "<raw>");
//! ```

pub mod config;
pub mod error;
pub mod policy;
pub mod profiles;
pub mod record;
pub mod sanitizer;

pub use config::WhiteListBuilder;
pub use error::{Result, WhiteListError};
pub use policy::{Overrides, Policy};
pub use profiles::Profile;
pub use record::{FieldSelection, Sanitizable, sanitize_fields};
pub use sanitizer::{Sanitizer, WhiteList};

/// Sanitize one string of untrusted markup under an already-resolved policy.
///
/// Convenience wrapper around [`WhiteList::sanitize`] for one-off calls;
/// construct a [`WhiteList`] once instead when sanitizing repeatedly.
///
/// # Example
///
/// ```
/// use html_whitelist::{Policy, Profile};
///
/// let policy = Policy::from_profile(Profile::Base);
/// assert_eq!(html_whitelist::sanitize("<i>hi</i>", &policy), "<i>hi</i>");
/// ```
pub fn sanitize(text: &str, policy: &Policy) -> String {
    WhiteList::new(policy.clone()).sanitize(text)
}
