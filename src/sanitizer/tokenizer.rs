//! Raw markup tokenizer.
//!
//! Splits input into a lazy sequence of spans: tag-like spans running from a
//! `<` to the next unquoted `>`, and text spans covering everything else.
//! The spans cover the input exactly, in order, with no gaps. The tokenizer
//! never fails -- an unterminated tag is yielded as-is and left for the
//! classifier to degrade to text.

/// Iterator over raw token spans of an input string.
///
/// All delimiters (`<`, `>`, `"`, `'`) are ASCII, so every yielded slice
/// starts and ends on a char boundary.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let len = if rest.as_bytes()[0] == b'<' {
            // Unterminated tags swallow the remainder; the classifier will
            // fail to parse them and carry them through as literal text.
            scan_tag(rest).unwrap_or(rest.len())
        } else {
            scan_text(rest)
        };

        self.pos += len;
        Some(&rest[..len])
    }
}

/// Length of the tag span starting at `<`, through the first `>` that is not
/// inside a single- or double-quoted attribute value. `None` if the tag never
/// closes.
fn scan_tag(rest: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, byte) in rest.as_bytes().iter().enumerate().skip(1) {
        match quote {
            Some(q) => {
                if *byte == q {
                    quote = None;
                }
            }
            None => match byte {
                b'"' | b'\'' => quote = Some(*byte),
                b'>' => return Some(i + 1),
                _ => {}
            },
        }
    }
    None
}

/// Length of the text span starting at a non-`<` byte, up to the next `<` or
/// end of input.
fn scan_text(rest: &str) -> usize {
    rest.find('<').unwrap_or(rest.len())
}
