//! The sanitization engine: tokenizer, node classifier, protocol validator,
//! attribute escaper, and the whitelist filter that ties them together.
//!
//! The only public pieces are the [`Sanitizer`] trait and the [`WhiteList`]
//! engine; the internals are a single-pass pipeline over the raw input:
//!
//! ```text
//! raw text -> Tokenizer -> Node classifier -> WhiteList filter -> String
//! ```

mod engine;
mod escape;
mod node;
mod protocol;
mod tokenizer;

pub use engine::WhiteList;

/// Trait for HTML content sanitizers.
///
/// Each sanitizer receives an HTML string and returns a transformed version.
/// Implementations must be `Send + Sync` so they can be shared across
/// threads.
pub trait Sanitizer: Send + Sync {
    /// Transform the given HTML content, returning the sanitized result.
    fn sanitize(&self, html: &str) -> String;
}
