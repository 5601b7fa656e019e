//! Error types for the search-box engine.
//!
//! This module defines the centralized error type [`SearchBoxError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Runtime failures inside the engine (a rejected suggestion fetch, a stale response)
//! never surface here: they are absorbed into engine state as an error message and an
//! `is_errored` tag. The variants below cover the only operations that report failure
//! to the caller directly, which are the configuration loaders.

use thiserror::Error;

/// The main error type for search-box operations.
///
/// This enum consolidates the error conditions that cross the library boundary.
/// Variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion where a source error exists.
///
/// # Examples
///
/// ```
/// use searchbox::domain::SearchBoxError;
///
/// fn validate_config() -> Result<(), SearchBoxError> {
///     Err(SearchBoxError::Config("Missing required field".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SearchBoxError {
    /// Configuration is invalid or malformed.
    ///
    /// Occurs when a configuration file cannot be parsed or contains values
    /// that cannot be interpreted. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while
    /// reading a configuration file. Automatically converts from
    /// `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for search-box operations.
///
/// This is a type alias for `std::result::Result<T, SearchBoxError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use searchbox::domain::Result;
///
/// fn load_something() -> Result<()> {
///     Ok(())
/// }
///
/// assert!(load_something().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, SearchBoxError>;
