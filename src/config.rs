//! Builder for configuring a [`WhiteList`] sanitizer.

use crate::policy::{Overrides, Policy};
use crate::profiles::Profile;
use crate::record::FieldSelection;
use crate::sanitizer::WhiteList;

/// Builder for a [`WhiteList`].
///
/// Provides a fluent API for picking a base [`Profile`], extending its four
/// whitelist dimensions, and restricting which record fields are sanitized.
///
/// # Example
///
/// ```
/// use html_whitelist::{Profile, WhiteListBuilder};
///
/// let whitelist = WhiteListBuilder::new()
///     .profile(Profile::Web)
///     .tags(["blockquote"])
///     .attributes(["title"])
///     .except(["slug"])
///     .build();
///
/// assert!(whitelist.policy().allows_tag("ul"));
/// assert!(whitelist.policy().allows_tag("blockquote"));
/// ```
pub struct WhiteListBuilder {
    profile: Profile,
    overrides: Overrides,
    only: Vec<String>,
    except: Vec<String>,
}

impl WhiteListBuilder {
    /// Create a builder with the `default` profile and no overrides.
    pub fn new() -> Self {
        Self {
            profile: Profile::Default,
            overrides: Overrides::default(),
            only: Vec::new(),
            except: Vec::new(),
        }
    }

    /// Base profile whose presets are extended by the overrides below.
    ///
    /// For string-typed configuration use [`Profile::resolve`], which maps
    /// unknown names to [`Profile::Default`] without failing.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Additional allowed element names.
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.overrides.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Additional allowed attribute names.
    pub fn attributes<I, T>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.overrides
            .attributes
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Additional element names whose content is deleted outright.
    pub fn bad_tags<I, T>(mut self, bad_tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.overrides
            .bad_tags
            .extend(bad_tags.into_iter().map(Into::into));
        self
    }

    /// Additional allowed URI schemes for `href`/`src` values.
    pub fn protocols<I, T>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.overrides
            .protocols
            .extend(protocols.into_iter().map(Into::into));
        self
    }

    /// Restrict field sanitization to exactly these fields.
    ///
    /// A non-empty `only` list takes precedence over [`except`](Self::except).
    pub fn only<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.only.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Exclude these fields from field sanitization.
    pub fn except<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.except.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Resolve the effective policy and build the sanitizer.
    pub fn build(self) -> WhiteList {
        let policy = Policy::resolve(self.profile, &self.overrides);
        let selection = if !self.only.is_empty() {
            FieldSelection::only(self.only)
        } else if !self.except.is_empty() {
            FieldSelection::except(self.except)
        } else {
            FieldSelection::All
        };
        WhiteList::with_selection(policy, selection)
    }
}

impl Default for WhiteListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_default_profile() {
        let whitelist = WhiteListBuilder::new().build();
        assert!(whitelist.policy().allows_tag("blockquote"));
        assert!(whitelist.policy().allows_attribute("class"));
        assert!(whitelist.policy().is_bad_tag("script"));
    }

    #[test]
    fn overrides_extend_profile() {
        let whitelist = WhiteListBuilder::new()
            .profile(Profile::Mini)
            .tags(["a"])
            .attributes(["href"])
            .protocols(["gemini"])
            .bad_tags(["iframe"])
            .build();
        let policy = whitelist.policy();
        assert!(policy.allows_tag("a"));
        assert!(policy.allows_attribute("href"));
        assert!(policy.protocols().contains("gemini"));
        assert!(policy.protocols().contains("https"));
        assert!(policy.is_bad_tag("iframe"));
        assert!(policy.is_bad_tag("script"));
    }

    #[test]
    fn setters_accumulate_across_calls() {
        let whitelist = WhiteListBuilder::new()
            .profile(Profile::Empty)
            .tags(["b"])
            .tags(["i"])
            .build();
        assert!(whitelist.policy().allows_tag("b"));
        assert!(whitelist.policy().allows_tag("i"));
    }
}
