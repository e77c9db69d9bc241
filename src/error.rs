//! Error types for the Emend library.
//!
//! All failures are represented by the [`EmendError`] enum. Dictionary
//! construction failures are fatal: a corpus that cannot be read or decoded
//! never degrades into a partial or empty dictionary.
//!
//! # Examples
//!
//! ```
//! use emend::error::{EmendError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EmendError::config("threshold missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Emend operations.
#[derive(Error, Debug)]
pub enum EmendError {
    /// I/O errors (corpus reads, config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The corpus could not be consumed during dictionary construction.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid configuration supplied at a boundary (CLI flag, costs file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with EmendError.
pub type Result<T> = std::result::Result<T, EmendError>;

impl EmendError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        EmendError::Corpus(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EmendError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        EmendError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EmendError::Other(msg.into())
    }
}
