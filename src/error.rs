//! Error types for the Wordfuse library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordfuseError`] enum. Missing pronunciations are not errors: the
//! dictionary reports them as `None` so that a batch of candidate pairs can
//! simply skip them.
//!
//! # Examples
//!
//! ```
//! use wordfuse::error::{Result, WordfuseError};
//!
//! fn lookup_operation() -> Result<()> {
//!     Err(WordfuseError::unknown_word("zyzzyva"))
//! }
//!
//! match lookup_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Wordfuse operations.
#[derive(Error, Debug)]
pub enum WordfuseError {
    /// Grapheme and phoneme chunk counts of a word differ.
    #[error("Shape mismatch: {graphemes} grapheme chunks vs {phonemes} phoneme chunks")]
    ShapeMismatch { graphemes: usize, phonemes: usize },

    /// Exact dictionary lookup miss.
    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// Malformed phonetic data source.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Caller-supplied argument or configuration out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (reading dictionary files, etc.)
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

/// Result type alias for operations that may fail with WordfuseError.
pub type Result<T> = std::result::Result<T, WordfuseError>;

impl WordfuseError {
    /// Create a new shape mismatch error.
    pub fn shape_mismatch(graphemes: usize, phonemes: usize) -> Self {
        WordfuseError::ShapeMismatch {
            graphemes,
            phonemes,
        }
    }

    /// Create a new unknown word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        WordfuseError::UnknownWord(word.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordfuseError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordfuseError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordfuseError::Other(msg.into())
    }

    /// Whether a batch caller may skip the offending candidate and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WordfuseError::UnknownWord(_))
    }
}
