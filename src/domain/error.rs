//! Error types for the ztube plugin.
//!
//! This module defines the centralized error type [`ZtubeError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Failures in ztube form a deliberately flat taxonomy: a search or detail
//! request that goes wrong for any reason (transport, HTTP status, malformed
//! JSON, unexpected shape) is logged and degraded to an empty or unchanged
//! state, never retried and never surfaced as a user-visible error message.

use thiserror::Error;

/// The main error type for ztube plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from wire-format decoding to theme loading. Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic
/// conversion.
///
/// # Examples
///
/// ```
/// use ztube::domain::ZtubeError;
///
/// fn reject_status() -> Result<(), ZtubeError> {
///     Err(ZtubeError::Http { status: 403 })
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZtubeError {
    /// The endpoint answered with a non-success HTTP status.
    ///
    /// The body is not inspected further; per the flat error taxonomy the
    /// request simply counts as failed.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code returned by the endpoint.
        status: u16,
    },

    /// A response body could not be decoded into the expected shape.
    ///
    /// Covers both invalid JSON and JSON whose structure does not match the
    /// documented endpoint shape. Automatically converts from
    /// `serde_json::Error` using the `#[from]` attribute.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (trace file writes,
    /// theme file reads). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for ztube operations.
///
/// This is a type alias for `std::result::Result<T, ZtubeError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use ztube::domain::Result;
///
/// fn decode_something() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZtubeError>;
