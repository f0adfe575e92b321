//! Resolved whitelist policies.
//!
//! A [`Policy`] is the effective configuration for one sanitization call:
//! four sets built by unioning a built-in [`Profile`](crate::Profile) preset
//! with caller-supplied [`Overrides`]. Once resolved a policy is immutable
//! and can be shared freely across threads.

use std::collections::HashSet;

use crate::profiles::Profile;

/// Caller-supplied additions layered on top of a profile preset.
///
/// Each list is unioned with the corresponding preset dimension; duplicates
/// are removed and tag/attribute names are lowercased during resolution.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Extra allowed element names.
    pub tags: Vec<String>,
    /// Extra allowed attribute names.
    pub attributes: Vec<String>,
    /// Extra element names whose content is deleted outright.
    pub bad_tags: Vec<String>,
    /// Extra allowed URI schemes.
    pub protocols: Vec<String>,
}

/// The effective whitelist for one sanitization call.
///
/// # Example
///
/// ```
/// use html_whitelist::{Overrides, Policy, Profile};
///
/// let policy = Policy::resolve(
///     Profile::Base,
///     &Overrides {
///         tags: vec!["blockquote".into()],
///         ..Overrides::default()
///     },
/// );
/// assert!(policy.allows_tag("b"));
/// assert!(policy.allows_tag("blockquote"));
/// assert!(!policy.allows_tag("script"));
/// ```
#[derive(Clone, Debug)]
pub struct Policy {
    tags: HashSet<String>,
    attributes: HashSet<String>,
    bad_tags: HashSet<String>,
    protocols: HashSet<String>,
}

/// Union a preset dimension with its override list, lowercasing names.
fn merge_lowercase(preset: &[&str], overrides: &[String]) -> HashSet<String> {
    preset
        .iter()
        .map(|name| name.to_ascii_lowercase())
        .chain(overrides.iter().map(|name| name.to_ascii_lowercase()))
        .collect()
}

impl Policy {
    /// Merge a profile preset with overrides into an effective policy.
    ///
    /// Pure function: the same inputs always produce the same policy, and
    /// nothing global is touched. Tag, bad-tag, and attribute names are
    /// lowercased; protocol schemes are kept exactly as configured and
    /// compared case-sensitively.
    pub fn resolve(profile: Profile, overrides: &Overrides) -> Self {
        let preset = profile.preset();
        Self {
            tags: merge_lowercase(preset.tags, &overrides.tags),
            attributes: merge_lowercase(preset.attributes, &overrides.attributes),
            bad_tags: merge_lowercase(preset.bad_tags, &overrides.bad_tags),
            protocols: preset
                .protocols
                .iter()
                .map(|scheme| (*scheme).to_string())
                .chain(overrides.protocols.iter().cloned())
                .collect(),
        }
    }

    /// The policy for a profile with no overrides.
    pub fn from_profile(profile: Profile) -> Self {
        Self::resolve(profile, &Overrides::default())
    }

    /// Whether elements with this (lowercase) name are kept in the output.
    pub fn allows_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Whether attributes with this (lowercase) name survive filtering.
    pub fn allows_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Whether this tag's content must be deleted entirely when suppressed.
    pub fn is_bad_tag(&self, name: &str) -> bool {
        self.bad_tags.contains(name)
    }

    /// The allowed URI schemes for `href`/`src` values.
    pub fn protocols(&self) -> &HashSet<String> {
        &self.protocols
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::from_profile(Profile::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_overrides_matches_preset() {
        let policy = Policy::from_profile(Profile::Base);
        assert!(policy.allows_tag("b"));
        assert!(policy.allows_tag("br"));
        assert!(!policy.allows_tag("ul"));
        assert!(policy.allows_attribute("href"));
        assert!(!policy.allows_attribute("class"));
        assert!(policy.is_bad_tag("script"));
        assert!(policy.protocols().contains("https"));
    }

    #[test]
    fn overrides_union_with_preset() {
        let policy = Policy::resolve(
            Profile::Mini,
            &Overrides {
                tags: vec!["a".into()],
                attributes: vec!["href".into()],
                bad_tags: vec!["style".into()],
                protocols: vec!["gemini".into()],
            },
        );
        assert!(policy.allows_tag("a"));
        assert!(policy.allows_attribute("href"));
        assert!(policy.is_bad_tag("script"));
        assert!(policy.is_bad_tag("style"));
        assert!(policy.protocols().contains("https"));
        assert!(policy.protocols().contains("gemini"));
    }

    #[test]
    fn duplicate_overrides_are_deduplicated() {
        let policy = Policy::resolve(
            Profile::Base,
            &Overrides {
                tags: vec!["b".into(), "b".into(), "em".into()],
                ..Overrides::default()
            },
        );
        assert!(policy.allows_tag("b"));
        assert!(policy.allows_tag("em"));
    }

    #[test]
    fn tag_names_are_lowercased() {
        let policy = Policy::resolve(
            Profile::Empty,
            &Overrides {
                tags: vec!["DIV".into()],
                attributes: vec!["Title".into()],
                ..Overrides::default()
            },
        );
        assert!(policy.allows_tag("div"));
        assert!(!policy.allows_tag("DIV"));
        assert!(policy.allows_attribute("title"));
    }

    #[test]
    fn protocols_keep_configured_case() {
        let policy = Policy::resolve(
            Profile::Empty,
            &Overrides {
                protocols: vec!["HTTP".into()],
                ..Overrides::default()
            },
        );
        assert!(policy.protocols().contains("HTTP"));
        assert!(!policy.protocols().contains("http"));
    }

    #[test]
    fn default_policy_is_default_profile() {
        let policy = Policy::default();
        assert!(policy.allows_tag("blockquote"));
        assert!(policy.allows_attribute("class"));
    }
}
