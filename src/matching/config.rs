//! Configuration shared by the match strategies.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, WordfuseError};

/// Configuration for a match strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Pairs are kept only when their alignment score is strictly greater.
    pub min_score: i32,
    /// Tokens longer than this many graphemes are skipped before alignment.
    pub max_token_chars: Option<usize>,
    /// Whether to evaluate candidate pairs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            min_score: 1,
            max_token_chars: None,
            parallel: true,
        }
    }
}

impl MatchConfig {
    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_chars == Some(0) {
            return Err(WordfuseError::invalid_argument(
                "max_token_chars must be at least 1",
            ));
        }
        Ok(())
    }

    /// Whether a token may enter alignment at all.
    pub fn accepts_token(&self, token: &str) -> bool {
        if !is_printable(token) {
            return false;
        }
        match self.max_token_chars {
            Some(limit) => token.graphemes(true).count() <= limit,
            None => true,
        }
    }
}

/// Whether every character is printable ASCII (letters, digits, punctuation
/// and whitespace).
pub fn is_printable(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}
