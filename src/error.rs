//! Error types for the Sentira library.
//!
//! All errors are represented by the [`SentiraError`] enum, which provides
//! detailed information about what went wrong, together with the [`Result`]
//! alias used throughout the crate.
//!
//! # Examples
//!
//! ```
//! use sentira::error::{Result, SentiraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiraError::invalid_input("text is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sentira operations.
///
/// Validation errors ([`SentiraError::InvalidInput`]) are recoverable and
/// meant to be surfaced to the caller as a user-facing message. Lexicon
/// errors ([`SentiraError::Lexicon`]) are configuration faults raised at
/// initialization, never per classification call. The crate never retries
/// internally.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// Input text was empty or whitespace-only.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lexicon-related errors (missing or uninitialized weight table).
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (lexicon file loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

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

/// Result type alias for operations that may fail with SentiraError.
pub type Result<T> = std::result::Result<T, SentiraError>;

impl SentiraError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SentiraError::InvalidInput(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        SentiraError::Lexicon(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiraError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentiraError::Other(msg.into())
    }
}
