//! Built-in whitelist profiles.
//!
//! A [`Profile`] names one of five shipped presets, from `empty` (nothing
//! allowed anywhere) up to `default` (a broad inline/block tag set). The
//! preset contents are fixed at compile time; callers extend them with
//! overrides at resolve time rather than mutating the table.

use std::str::FromStr;

use crate::error::WhiteListError;

/// The standard URI schemes shared by every non-empty profile.
const STANDARD_PROTOCOLS: &[&str] = &[
    "ed2k", "ftp", "http", "https", "irc", "mailto", "news", "gopher", "nntp", "telnet", "webcal",
    "xmpp", "callto", "feed",
];

const BASE_TAGS: &[&str] = &["b", "i", "u", "strike", "br"];

const WEB_TAGS: &[&str] = &["b", "u", "i", "strike", "br", "ul", "ol", "li"];

const DEFAULT_TAGS: &[&str] = &[
    "strong",
    "em",
    "b",
    "i",
    "u",
    "p",
    "code",
    "pre",
    "tt",
    "output",
    "samp",
    "kbd",
    "var",
    "sub",
    "sup",
    "dfn",
    "cite",
    "big",
    "small",
    "address",
    "hr",
    "br",
    "div",
    "span",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "li",
    "dt",
    "dd",
    "abbr",
    "acronym",
    "a",
    "img",
    "blockquote",
    "del",
    "ins",
    "fieldset",
    "legend",
];

const BASE_ATTRIBUTES: &[&str] = &["href", "src"];

const DEFAULT_ATTRIBUTES: &[&str] = &[
    "href", "src", "width", "height", "alt", "cite", "datetime", "title", "class",
];

const SCRIPT_ONLY: &[&str] = &["script"];

/// The raw contents of one built-in profile.
pub(crate) struct Preset {
    pub tags: &'static [&'static str],
    pub attributes: &'static [&'static str],
    pub bad_tags: &'static [&'static str],
    pub protocols: &'static [&'static str],
}

const EMPTY: Preset = Preset {
    tags: &[],
    attributes: &[],
    bad_tags: &[],
    protocols: &[],
};

const MINI: Preset = Preset {
    tags: &[],
    attributes: &[],
    bad_tags: SCRIPT_ONLY,
    protocols: STANDARD_PROTOCOLS,
};

const BASE: Preset = Preset {
    tags: BASE_TAGS,
    attributes: BASE_ATTRIBUTES,
    bad_tags: SCRIPT_ONLY,
    protocols: STANDARD_PROTOCOLS,
};

const WEB: Preset = Preset {
    tags: WEB_TAGS,
    attributes: BASE_ATTRIBUTES,
    bad_tags: SCRIPT_ONLY,
    protocols: STANDARD_PROTOCOLS,
};

const DEFAULT: Preset = Preset {
    tags: DEFAULT_TAGS,
    attributes: DEFAULT_ATTRIBUTES,
    bad_tags: SCRIPT_ONLY,
    protocols: STANDARD_PROTOCOLS,
};

/// One of the five built-in whitelist presets.
///
/// | Profile | Tags | Attributes | Protocols |
/// |---------|------|------------|-----------|
/// | `Empty` | none | none | none |
/// | `Mini` | none | none | standard list |
/// | `Base` | `b i u strike br` | `href src` | standard list |
/// | `Web` | `Base` plus lists | `href src` | standard list |
/// | `Default` | broad inline/block set | broad set | standard list |
///
/// Every profile except `Empty` lists `script` as a bad tag whose content is
/// deleted outright.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    Empty,
    Mini,
    Base,
    Web,
    #[default]
    Default,
}

impl Profile {
    /// Resolve a profile by name, falling back to [`Profile::Default`] for
    /// names that do not match any built-in profile.
    ///
    /// The fallback is silent apart from a `tracing` warning; use the
    /// [`FromStr`] implementation to reject unknown names instead.
    ///
    /// # Example
    ///
    /// ```
    /// use html_whitelist::Profile;
    ///
    /// assert_eq!(Profile::resolve("web"), Profile::Web);
    /// assert_eq!(Profile::resolve("no-such-profile"), Profile::Default);
    /// ```
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown whitelist profile {name:?}, falling back to default");
            Profile::Default
        })
    }

    /// The profile's name as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Profile::Empty => "empty",
            Profile::Mini => "mini",
            Profile::Base => "base",
            Profile::Web => "web",
            Profile::Default => "default",
        }
    }

    pub(crate) fn preset(self) -> &'static Preset {
        match self {
            Profile::Empty => &EMPTY,
            Profile::Mini => &MINI,
            Profile::Base => &BASE,
            Profile::Web => &WEB,
            Profile::Default => &DEFAULT,
        }
    }
}

impl FromStr for Profile {
    type Err = WhiteListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Profile::Empty),
            "mini" => Ok(Profile::Mini),
            "base" => Ok(Profile::Base),
            "web" => Ok(Profile::Web),
            "default" => Ok(Profile::Default),
            other => Err(WhiteListError::UnknownProfile(other.to_string())),
        }
    }
}
