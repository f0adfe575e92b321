//! URI scheme validation for protocol-bearing attributes.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Attribute names whose values carry a URI and are subject to scheme checks.
const PROTOCOL_ATTRIBUTES: &[&str] = &["href", "src"];

/// Matches any recognized encoding of a scheme separator: a literal colon, a
/// decimal character reference (`&#58;` with optional leading zeros), the
/// hex-reference form, or a percent-encoded colon (`%3A` / `&#37;3A`).
fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| {
        Regex::new(r":|(&#0*58)|(&#x70)|(%|&#37;)3A").expect("separator pattern is valid")
    })
}

/// Whether this attribute name is subject to scheme validation.
pub(crate) fn is_protocol_attribute(name: &str) -> bool {
    PROTOCOL_ATTRIBUTES.contains(&name)
}

/// Returns `true` if `value` carries a URI scheme that is not in the allowed
/// set.
///
/// The candidate scheme is everything before the first scheme-separator
/// match. A value with no separator is a relative reference and passes.
/// Scheme comparison is case-sensitive against the configured set.
pub(crate) fn contains_bad_protocols(value: &str, protocols: &HashSet<String>) -> bool {
    match separator().find(value) {
        Some(m) => !protocols.contains(&value[..m.start()]),
        None => false,
    }
}
