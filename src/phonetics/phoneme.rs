//! Phoneme and grapheme units.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::phonetics::stress::{self, Stress};

/// A spelling unit: one or more letters treated as an atomic chunk.
pub type Grapheme = String;

/// Base codes of the vowel phonemes. Only these receive stress markers.
pub const VOWELS: [&str; 12] = [
    "IY", "IH", "EY", "EH", "AE", "AH", "AA", "AO", "ER", "OW", "UH", "UW",
];

/// An ARPABET phoneme symbol, optionally suffixed with a stress digit.
///
/// Equality is exact. Use [`Phoneme::eq_ignore_stress`] to compare base codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phoneme(String);

impl Phoneme {
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Phoneme(symbol.into())
    }

    /// The empty phoneme, used as a gap placeholder in alignments.
    pub fn silent() -> Self {
        Phoneme(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_silent(&self) -> bool {
        self.0.is_empty()
    }

    /// The symbol without its stress digit.
    pub fn base(&self) -> &str {
        stress::ignore_stress(&self.0)
    }

    pub fn stress(&self) -> Option<Stress> {
        self.0.chars().last().and_then(Stress::from_marker)
    }

    /// Stress strength, 0 when the phoneme carries no marker.
    pub fn strength(&self) -> u8 {
        stress::phoneme_strength(&self.0)
    }

    /// Replace the stress marker. Consonants are returned unmarked.
    pub fn with_stress(&self, stress: Stress) -> Self {
        let base = self.base();
        if is_vowel(base) {
            Phoneme(format!("{base}{}", stress.marker()))
        } else {
            Phoneme(base.to_string())
        }
    }

    pub fn is_vowel(&self) -> bool {
        is_vowel(self.base())
    }

    pub fn eq_ignore_stress(&self, other: &Phoneme) -> bool {
        stress::equal_ignoring_stress(&self.0, &other.0)
    }
}

/// Whether a base code belongs to the vowel class.
pub fn is_vowel(base: &str) -> bool {
    VOWELS.contains(&base)
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_silent() {
            write!(f, "_")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for Phoneme {
    fn from(symbol: &str) -> Self {
        Phoneme::new(symbol)
    }
}
