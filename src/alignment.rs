//! Pairwise sequence alignment for Wordfuse.
//!
//! This module hosts the dynamic-programming aligner shared by every match
//! strategy, along with the scoring functions it is parameterized by.

pub mod engine;
pub mod scoring;

// Re-export commonly used types
pub use engine::{Aligner, Alignment, AlignmentMode};
pub use scoring::{FnScoring, IdentityScoring, PhoneticScoring, Scoring};
