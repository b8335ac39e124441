//! # Wordfuse
//!
//! Finds places where two words can be fused into one: puns, portmanteaux and
//! rhymes.
//!
//! ## Features
//!
//! - ARPABET word model aligned chunk by chunk with spelling
//! - Stress tracking and diphthong decomposition
//! - Phrase pronunciation assembled from dictionary entries
//! - Generalized Smith-Waterman / Needleman-Wunsch alignment with pluggable scoring
//! - Orthographic, phonetic and rhyme match strategies

pub mod alignment;
pub mod error;
pub mod matching;
pub mod phonetics;

pub mod prelude {
    pub use crate::alignment::{Aligner, Alignment, AlignmentMode, Scoring};
    pub use crate::error::{Result, WordfuseError};
    pub use crate::matching::{
        Match, MatchConfig, MatchKind, MatchStrategy, OrthographicMatch, PhoneticMatch,
        Prioritized, RhymeMatch,
    };
    pub use crate::phonetics::{Phoneme, PhoneticDictionary, PhoneticWord, Stress, StoredWord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
