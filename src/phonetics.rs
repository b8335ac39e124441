//! Phonetic word model for Wordfuse.
//!
//! Words are represented as ARPABET pronunciations aligned chunk by chunk with
//! their spelling. This module provides the stress model, diphthong
//! decomposition, the [`PhoneticWord`] type and the [`PhoneticDictionary`]
//! that pronounces single tokens and multi-word phrases.

pub mod diphthong;
pub mod dictionary;
pub mod phoneme;
pub mod stress;
pub mod word;

// Re-export commonly used types
pub use dictionary::PhoneticDictionary;
pub use phoneme::{Grapheme, Phoneme};
pub use stress::Stress;
pub use word::{PhoneticWord, RhymeEnding, StoredWord};
