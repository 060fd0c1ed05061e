//! Error types for the Rustem library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`RustemError`] enum.
//!
//! # Examples
//!
//! ```
//! use rustem::error::{Result, RustemError};
//!
//! fn parse_tag(tag: &str) -> Result<()> {
//!     Err(RustemError::invalid_config(format!("unknown version tag: {tag}")))
//! }
//!
//! assert!(parse_tag("banana").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Rustem operations.
#[derive(Error, Debug)]
pub enum RustemError {
    /// I/O errors while reading input text.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A wordlist resource could not be read or decoded.
    #[error("Unable to load resource '{resource}': {message}")]
    ResourceLoad { resource: String, message: String },

    /// The analyzer configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RustemError.
pub type Result<T> = std::result::Result<T, RustemError>;

impl RustemError {
    /// Create a new resource load error.
    pub fn resource_load<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        RustemError::ResourceLoad {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RustemError::InvalidConfiguration(msg.into())
    }

    /// Whether this error came from loading a wordlist resource.
    pub fn is_resource_load(&self) -> bool {
        matches!(self, RustemError::ResourceLoad { .. })
    }
}
