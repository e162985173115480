//! Error types for bucket-lister.
//!
//! This crate provides:
//! - [`BlError`] - Top-level error enum shared by the library and the CLI
//! - [`Result`] - Alias using [`BlError`]
//!
//! Failures are not classified or retried. The message carried by
//! [`BlError::ListBuckets`] is the SDK's own error chain, passed through as-is.

use thiserror::Error;

/// Top-level error type for bucket-lister.
#[derive(Error, Debug)]
pub enum BlError {
    /// The ListBuckets request failed (credentials, transport, auth, ...)
    #[error("ListBuckets failed: {0}")]
    ListBuckets(String),

    /// Rendering the response or writing it to stdout failed
    #[error("Output error: {0}")]
    Output(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using BlError.
pub type Result<T> = std::result::Result<T, BlError>;
