//! Sound-based matching.

use std::sync::Arc;

use crate::alignment::{Aligner, PhoneticScoring};
use crate::matching::config::MatchConfig;
use crate::matching::strategy::{MatchStrategy, PairOutcome};
use crate::phonetics::dictionary::PhoneticDictionary;
use crate::phonetics::phoneme::Phoneme;

/// Finds pairs whose pronunciations overlap, ignoring stress.
#[derive(Debug, Clone)]
pub struct PhoneticMatch {
    dictionary: Arc<PhoneticDictionary>,
    config: MatchConfig,
    scoring: PhoneticScoring,
}

impl PhoneticMatch {
    pub fn new(dictionary: Arc<PhoneticDictionary>) -> Self {
        Self::with_config(dictionary, MatchConfig::default())
    }

    pub fn with_config(dictionary: Arc<PhoneticDictionary>, config: MatchConfig) -> Self {
        PhoneticMatch {
            dictionary,
            config,
            scoring: PhoneticScoring::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: PhoneticScoring) -> Self {
        self.scoring = scoring;
        self
    }

    fn phonemes(&self, token: &str) -> Option<Vec<Phoneme>> {
        self.dictionary
            .pronounce(token)
            .map(|word| word.unaligned_phonemes())
    }
}

impl MatchStrategy for PhoneticMatch {
    fn name(&self) -> &'static str {
        "phonetic"
    }

    fn description(&self) -> &'static str {
        "Words whose pronunciations overlap"
    }

    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn evaluate_pair(&self, first: &str, second: &str) -> PairOutcome {
        let (Some(first), Some(second)) = (self.phonemes(first), self.phonemes(second)) else {
            return PairOutcome::Unpronounceable;
        };
        let alignment = Aligner::local().align(&first, &second, &self.scoring, Phoneme::silent);
        PairOutcome::from_alignment(&alignment, &self.config)
    }
}
