//! Match strategies for Wordfuse.
//!
//! A strategy takes weighted candidate pairs and returns the pairs that can be
//! fused, ranked by weight times alignment score. Three strategies are
//! provided: orthographic, phonetic and rhyme.

pub mod config;
pub mod orthographic;
pub mod phonetic;
pub mod rhyme;
pub mod strategy;

// Re-export commonly used types
pub use config::MatchConfig;
pub use orthographic::OrthographicMatch;
pub use phonetic::PhoneticMatch;
pub use rhyme::RhymeMatch;
pub use strategy::{
    Match, MatchDescriptor, MatchKind, MatchStats, MatchStrategy, PairOutcome, PotentialMatch,
    Prioritized, prioritized_pairs, sterilize_group,
};
