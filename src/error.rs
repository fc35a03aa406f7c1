//! Error types for the xyston library.
//!
//! All fallible operations return [`XystonError`] through the crate-wide
//! [`Result`] alias. Variants fall into three families: configuration
//! problems (fatal at startup), validation problems (fatal to the single
//! call that supplied the bad input), and transient I/O against the
//! embedding provider or the similarity store (retriable, or degradable
//! at the caller's choice).
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn check_weights(semantic: f32, keyword: f32) -> Result<()> {
//!     if (semantic + keyword - 1.0).abs() > 1e-3 {
//!         return Err(XystonError::validation("weights must sum to 1.0"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_weights(0.7, 0.3).is_ok());
//! assert!(check_weights(0.7, 0.1).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for xyston operations.
#[derive(Error, Debug)]
pub enum XystonError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Startup configuration errors (missing credentials, bad parameters)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input for a single call (bad weights, malformed records)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failures from the embedding provider
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Failures from the similarity store
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bugs and broken internal invariants
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        XystonError::Configuration(msg.into())
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        XystonError::Validation(msg.into())
    }

    /// Create a new embedding provider error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        XystonError::Embedding(msg.into())
    }

    /// Create a new similarity store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        XystonError::Store(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        XystonError::Internal(msg.into())
    }

    /// True for failures of an external collaborator that a caller may
    /// reasonably retry or degrade around. Configuration and validation
    /// errors are never transient.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            XystonError::Io(_) | XystonError::Embedding(_) | XystonError::Store(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = XystonError::validation("weights must sum to 1.0");
        assert_eq!(
            error.to_string(),
            "Validation error: weights must sum to 1.0"
        );

        let error = XystonError::embedding("model unavailable");
        assert_eq!(error.to_string(), "Embedding error: model unavailable");

        let error = XystonError::store("rpc failed");
        assert_eq!(error.to_string(), "Store error: rpc failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let xyston_error = XystonError::from(io_error);

        match xyston_error {
            XystonError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(XystonError::embedding("timeout").is_transient());
        assert!(XystonError::store("connection reset").is_transient());
        assert!(!XystonError::validation("bad weights").is_transient());
        assert!(!XystonError::configuration("missing url").is_transient());
    }
}
