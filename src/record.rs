//! Field-level sanitization for record-like types.
//!
//! This is the in-memory counterpart of "sanitize the string columns of a
//! model before saving": a record exposes its named string fields, a
//! [`FieldSelection`] decides which of them are in scope, and
//! [`sanitize_fields`] rewrites each selected field through a
//! [`Sanitizer`]. No persistence is involved; callers that store records
//! invoke this before handing the record to their own storage layer.

use std::collections::HashSet;

use crate::sanitizer::Sanitizer;

/// Trait implemented by user-defined record types whose string fields hold
/// untrusted markup.
///
/// # Example
///
/// ```
/// use html_whitelist::Sanitizable;
///
/// struct Comment {
///     author: String,
///     body: String,
/// }
///
/// impl Sanitizable for Comment {
///     fn fields(&mut self) -> Vec<(&'static str, &mut String)> {
///         vec![("author", &mut self.author), ("body", &mut self.body)]
///     }
/// }
/// ```
pub trait Sanitizable {
    /// Returns the record's sanitizable fields as `(name, value)` pairs.
    ///
    /// The names are matched against the `only`/`except` field selection;
    /// selected values are rewritten in place.
    fn fields(&mut self) -> Vec<(&'static str, &mut String)>;
}

/// Which of a record's fields get sanitized.
///
/// A non-empty `only` list configured on the builder produces
/// [`FieldSelection::Only`] and takes precedence over `except`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldSelection {
    /// Every field.
    #[default]
    All,
    /// Exactly the named fields.
    Only(HashSet<String>),
    /// Every field except the named ones.
    Except(HashSet<String>),
}

impl FieldSelection {
    /// Select exactly the named fields.
    pub fn only<I, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Only(fields.into_iter().map(Into::into).collect())
    }

    /// Select every field except the named ones.
    pub fn except<I, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Except(fields.into_iter().map(Into::into).collect())
    }

    /// Whether the named field is in scope for sanitization.
    pub fn includes(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(fields) => fields.contains(field),
            Self::Except(fields) => !fields.contains(field),
        }
    }
}

/// Rewrite each selected field of `record` through `sanitizer`, in place.
pub fn sanitize_fields<R, S>(record: &mut R, sanitizer: &S, selection: &FieldSelection)
where
    R: Sanitizable + ?Sized,
    S: Sanitizer + ?Sized,
{
    for (name, value) in record.fields() {
        if selection.includes(name) {
            let sanitized = sanitizer.sanitize(value);
            *value = sanitized;
        }
    }
}
