//! Rhyme matching.
//!
//! Two words rhyme here when their stressed vowels share a base symbol and the
//! endings from those vowels onward align well end to end. Pairs whose stressed
//! vowels differ are rejected before any alignment runs.

use std::sync::Arc;

use crate::alignment::{Aligner, IdentityScoring};
use crate::matching::config::MatchConfig;
use crate::matching::strategy::{MatchStrategy, PairOutcome};
use crate::phonetics::dictionary::PhoneticDictionary;
use crate::phonetics::phoneme::Phoneme;
use crate::phonetics::word::RhymeEnding;

/// Rhymes words on their stressed vowel.
///
/// The stressed vowel is aligned along with its suffix, so it counts toward the
/// score: "cat" and "hat" share `AE1 T` and score 2, which clears the default
/// `min_score` of 1. Raise `min_score` by one to require a matching suffix of
/// two phonemes.
#[derive(Debug, Clone)]
pub struct RhymeMatch {
    dictionary: Arc<PhoneticDictionary>,
    config: MatchConfig,
    scoring: IdentityScoring,
}

impl RhymeMatch {
    pub fn new(dictionary: Arc<PhoneticDictionary>) -> Self {
        Self::with_config(dictionary, MatchConfig::default())
    }

    pub fn with_config(dictionary: Arc<PhoneticDictionary>, config: MatchConfig) -> Self {
        RhymeMatch {
            dictionary,
            config,
            scoring: IdentityScoring::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: IdentityScoring) -> Self {
        self.scoring = scoring;
        self
    }

    fn ending(&self, token: &str) -> Option<RhymeEnding> {
        self.dictionary.pronounce(token)?.rhyme_ending()
    }
}

impl MatchStrategy for RhymeMatch {
    fn name(&self) -> &'static str {
        "rhyme"
    }

    fn description(&self) -> &'static str {
        "Words that rhyme on their stressed vowel"
    }

    fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Tokens without a stress-marked phoneme count as unpronounceable.
    fn evaluate_pair(&self, first: &str, second: &str) -> PairOutcome {
        let (Some(first), Some(second)) = (self.ending(first), self.ending(second)) else {
            return PairOutcome::Unpronounceable;
        };
        if !first.stressed.eq_ignore_stress(&second.stressed) {
            return PairOutcome::Prefiltered;
        }
        let alignment = Aligner::global().align(
            &first.phonemes(),
            &second.phonemes(),
            &self.scoring,
            Phoneme::silent,
        );
        PairOutcome::from_alignment(&alignment, &self.config)
    }
}
