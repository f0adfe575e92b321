//! Classifies raw token spans as element tags or opaque text.
//!
//! Classification is best-effort: anything that does not parse as an element
//! token (comments, doctypes, stray `<`, unterminated tags) is carried
//! through as [`Node::Text`] verbatim rather than raising an error.

/// Whether a tag opens, closes, or self-closes an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TagKind {
    Open,
    Close,
    SelfClose,
}

/// A parsed element token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tag {
    /// Lowercased element name.
    pub name: String,
    /// Attributes in encounter order, names lowercased, values raw.
    pub attributes: Vec<(String, String)>,
    pub kind: TagKind,
}

/// One classified token: an element tag or a literal text span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node<'a> {
    Tag(Tag),
    Text(&'a str),
}

impl<'a> Node<'a> {
    /// Interpret one raw span from the tokenizer.
    pub fn classify(raw: &'a str) -> Node<'a> {
        match parse_tag(raw) {
            Some(tag) => Node::Tag(tag),
            None => Node::Text(raw),
        }
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b':' | b'-' | b'_')
}

fn parse_tag(raw: &str) -> Option<Tag> {
    let bytes = raw.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'<' || bytes[bytes.len() - 1] != b'>' {
        return None;
    }
    let mut inner = &raw[1..raw.len() - 1];

    let closing = inner.starts_with('/');
    if closing {
        inner = &inner[1..];
    }

    let mut kind = if closing { TagKind::Close } else { TagKind::Open };
    if !closing && inner.ends_with('/') {
        kind = TagKind::SelfClose;
        inner = &inner[..inner.len() - 1];
    }

    let inner_bytes = inner.as_bytes();
    if inner_bytes.is_empty() || !inner_bytes[0].is_ascii_alphabetic() {
        return None;
    }
    let name_len = inner_bytes
        .iter()
        .position(|b| !is_name_byte(*b))
        .unwrap_or(inner_bytes.len());

    let name = inner[..name_len].to_ascii_lowercase();
    // Close tags carry no attributes; any junk after the name is ignored.
    let attributes = if kind == TagKind::Close {
        Vec::new()
    } else {
        parse_attributes(&inner[name_len..])
    };

    Some(Tag {
        name,
        attributes,
        kind,
    })
}

/// Parse `name="value"`, `name='value'`, `name=value`, and bare `name`
/// attribute forms. Bare attributes get an empty-string value; an
/// unterminated quoted value runs to the end of the span.
fn parse_attributes(input: &str) -> Vec<(String, String)> {
    let bytes = input.as_bytes();
    let mut attributes = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' {
            i += 1;
        }
        if i == name_start {
            // Stray `=` or similar; skip it rather than looping forever.
            i += 1;
            continue;
        }
        let name = input[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let value = if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                let value = input[value_start..i].to_string();
                if i < bytes.len() {
                    i += 1; // closing quote
                }
                value
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                input[value_start..i].to_string()
            }
        } else {
            String::new()
        };

        attributes.push((name, value));
    }

    attributes
}
