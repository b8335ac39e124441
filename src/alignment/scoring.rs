//! Pluggable scoring for the alignment engine.
//!
//! A [`Scoring`] decides how much aligning two elements is worth and how much
//! leaving an element unmatched costs. Skip costs are subtracted, so they
//! should be non-negative.

use serde::{Deserialize, Serialize};

use crate::phonetics::phoneme::Phoneme;

/// Per-element scoring used by [`crate::alignment::Aligner`].
///
/// Implementations must be deterministic; the engine does not guard against
/// inconsistent scores.
pub trait Scoring<T> {
    /// Score for aligning `a` against `b`.
    fn similarity(&self, a: &T, b: &T) -> i32;

    /// Cost of leaving `element` unmatched.
    fn skip_cost(&self, element: &T) -> i32;
}

/// Scoring built from two closures.
pub struct FnScoring<S, K> {
    similarity: S,
    skip_cost: K,
}

impl<S, K> FnScoring<S, K> {
    pub fn new(similarity: S, skip_cost: K) -> Self {
        FnScoring {
            similarity,
            skip_cost,
        }
    }
}

impl<T, S, K> Scoring<T> for FnScoring<S, K>
where
    S: Fn(&T, &T) -> i32,
    K: Fn(&T) -> i32,
{
    fn similarity(&self, a: &T, b: &T) -> i32 {
        (self.similarity)(a, b)
    }

    fn skip_cost(&self, element: &T) -> i32 {
        (self.skip_cost)(element)
    }
}

/// Exact-match scoring with a flat skip cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityScoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub skip_cost: i32,
}

impl IdentityScoring {
    /// Identity scoring that makes skipping free.
    pub fn free_skips() -> Self {
        IdentityScoring {
            skip_cost: 0,
            ..Default::default()
        }
    }
}

impl Default for IdentityScoring {
    fn default() -> Self {
        IdentityScoring {
            match_score: 1,
            mismatch_score: -1,
            skip_cost: 1,
        }
    }
}

impl<T: PartialEq> Scoring<T> for IdentityScoring {
    fn similarity(&self, a: &T, b: &T) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn skip_cost(&self, _element: &T) -> i32 {
        self.skip_cost
    }
}

/// Stress-insensitive phoneme scoring.
///
/// Phonemes with the same base code match. A vowel against a vowel, or a
/// consonant against a consonant, scores `class_mismatch_score`; anything else
/// scores `mismatch_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticScoring {
    pub match_score: i32,
    pub class_mismatch_score: i32,
    pub mismatch_score: i32,
    pub skip_cost: i32,
}

impl Default for PhoneticScoring {
    fn default() -> Self {
        PhoneticScoring {
            match_score: 1,
            class_mismatch_score: 0,
            mismatch_score: -1,
            skip_cost: 1,
        }
    }
}

impl Scoring<Phoneme> for PhoneticScoring {
    fn similarity(&self, a: &Phoneme, b: &Phoneme) -> i32 {
        if a.eq_ignore_stress(b) {
            self.match_score
        } else if a.is_vowel() == b.is_vowel() {
            self.class_mismatch_score
        } else {
            self.mismatch_score
        }
    }

    fn skip_cost(&self, _element: &Phoneme) -> i32 {
        self.skip_cost
    }
}
