//! The whitelist filter engine.

use crate::policy::Policy;
use crate::record::{self, FieldSelection, Sanitizable};

use super::Sanitizer;
use super::escape::escape_attribute;
use super::node::{Node, Tag, TagKind};
use super::protocol::{contains_bad_protocols, is_protocol_attribute};
use super::tokenizer::Tokenizer;

/// Whitelist-based HTML sanitizer.
///
/// Walks the input token stream once, keeping allowed tags (with their
/// surviving, entity-escaped attributes), unwrapping merely-unknown tags, and
/// deleting the content of bad tags outright. See the crate docs for the
/// exact suppression semantics.
///
/// A `WhiteList` is immutable after construction and can be shared across
/// threads; concurrent [`sanitize`](Self::sanitize) calls on different inputs
/// need no locking.
///
/// # Example
///
/// ```
/// use html_whitelist::{Policy, Profile, WhiteList};
///
/// let whitelist = WhiteList::new(Policy::from_profile(Profile::Base));
/// assert_eq!(
///     whitelist.sanitize(r#"<b>hi</b><script>alert(1)</script>"#),
///     "<b>hi</b>"
/// );
/// ```
pub struct WhiteList {
    policy: Policy,
    selection: FieldSelection,
}

impl WhiteList {
    /// Create a sanitizer for the given resolved policy, applying to all
    /// fields when used through [`sanitize_fields`](Self::sanitize_fields).
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            selection: FieldSelection::All,
        }
    }

    pub(crate) fn with_selection(policy: Policy, selection: FieldSelection) -> Self {
        Self { policy, selection }
    }

    /// The effective policy this sanitizer applies.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Sanitize one string of untrusted markup.
    ///
    /// Never fails: malformed markup degrades to literal text, and input
    /// containing no `<` at all is returned unchanged without tokenizing.
    pub fn sanitize(&self, text: &str) -> String {
        if text.is_empty() || !text.contains('<') {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        // The single piece of filter state: the most recently seen disallowed
        // tag name. Cleared by any allowed tag, not by a matching close tag.
        let mut suppressed: Option<String> = None;

        for raw in Tokenizer::new(text) {
            match Node::classify(raw) {
                Node::Tag(tag) => {
                    // Attributes are filtered for every tag so that protocol
                    // checks behave the same whether or not the tag survives.
                    let attributes = self.surviving_attributes(&tag);
                    if self.policy.allows_tag(&tag.name) {
                        suppressed = None;
                        write_tag(&mut out, &tag, &attributes);
                    } else {
                        // The tag's own markup is dropped; whether the
                        // following content goes with it depends on bad_tags.
                        suppressed = Some(tag.name);
                    }
                }
                Node::Text(span) => {
                    let deleting = suppressed
                        .as_deref()
                        .is_some_and(|name| self.policy.is_bad_tag(name));
                    if !deleting {
                        out.push_str(span);
                    }
                }
            }
        }

        out
    }

    /// Sanitize the selected string fields of a record in place, honoring the
    /// `only`/`except` selection configured on the builder.
    pub fn sanitize_fields<R: Sanitizable>(&self, record: &mut R) {
        record::sanitize_fields(record, self, &self.selection);
    }

    /// Two-phase attribute filtering: collect the survivors first, then build
    /// the output tag from that list.
    fn surviving_attributes(&self, tag: &Tag) -> Vec<(String, String)> {
        let mut survivors = Vec::with_capacity(tag.attributes.len());
        for (name, value) in &tag.attributes {
            if !self.policy.allows_attribute(name) {
                continue;
            }
            if is_protocol_attribute(name) && contains_bad_protocols(value, self.policy.protocols())
            {
                tracing::debug!("Dropping {name} attribute with disallowed protocol");
                continue;
            }
            survivors.push((name.clone(), escape_attribute(value)));
        }
        survivors
    }
}

impl Sanitizer for WhiteList {
    fn sanitize(&self, html: &str) -> String {
        WhiteList::sanitize(self, html)
    }
}

fn write_tag(out: &mut String, tag: &Tag, attributes: &[(String, String)]) {
    if tag.kind == TagKind::Close {
        out.push_str("</");
        out.push_str(&tag.name);
        out.push('>');
        return;
    }

    out.push('<');
    out.push_str(&tag.name);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    if tag.kind == TagKind::SelfClose {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}
