//! Error types for the `html_whitelist` crate.
//!
//! Sanitization itself never fails -- malformed markup degrades to literal
//! text and unknown profile names fall back to the `default` profile. The
//! error type here exists for callers that want to validate configuration
//! strictly (e.g. reject a typo in a config file) instead of relying on the
//! silent fallback.

/// All errors that can occur while configuring a whitelist.
#[derive(Debug, thiserror::Error)]
pub enum WhiteListError {
    /// A profile name did not match any built-in profile.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

/// A type alias for `Result<T, WhiteListError>`.
pub type Result<T> = std::result::Result<T, WhiteListError>;
