//! Spelling-based matching.

use unicode_segmentation::UnicodeSegmentation;

use crate::alignment::{Aligner, IdentityScoring};
use crate::matching::config::MatchConfig;
use crate::matching::strategy::{MatchStrategy, PairOutcome};
use crate::phonetics::word::NO_SPELLING;

/// Finds pairs whose spellings overlap, e.g. "star" and "start".
#[derive(Debug, Clone, Default)]
pub struct OrthographicMatch {
    config: MatchConfig,
    scoring: IdentityScoring,
}

impl OrthographicMatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatchConfig) -> Self {
        OrthographicMatch {
            config,
            scoring: IdentityScoring::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: IdentityScoring) -> Self {
        self.scoring = scoring;
        self
    }
}

impl MatchStrategy for OrthographicMatch {
    fn name(&self) -> &'static str {
        "orthographic"
    }

    fn description(&self) -> &'static str {
        "Words whose spellings overlap"
    }

    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn evaluate_pair(&self, first: &str, second: &str) -> PairOutcome {
        let first: Vec<&str> = first.graphemes(true).collect();
        let second: Vec<&str> = second.graphemes(true).collect();
        let alignment = Aligner::local().align(&first, &second, &self.scoring, || NO_SPELLING);
        PairOutcome::from_alignment(&alignment, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::strategy::{Prioritized, prioritized_pairs, sterilize_group};

    #[test]
    fn test_star_start() {
        match OrthographicMatch::new().evaluate_pair("star", "start") {
            PairOutcome::Matched(descriptor) => {
                assert_eq!(descriptor.score, 4);
                assert_eq!(descriptor.aligned_first, vec!["s", "t", "a", "r"]);
                assert_eq!(descriptor.aligned_second, vec!["s", "t", "a", "r"]);
                assert_eq!(descriptor.start, (0, 0));
            }
            other => panic!("Expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_overlap_at_edges() {
        // "tar" overlaps the end of "star": one unmatched letter before, none after.
        match OrthographicMatch::new().evaluate_pair("tar", "star") {
            PairOutcome::Matched(descriptor) => {
                assert_eq!(descriptor.score, 3);
                assert_eq!(descriptor.start, (0, 1));
            }
            other => panic!("Expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_below_threshold() {
        assert!(matches!(
            OrthographicMatch::new().evaluate_pair("ox", "quiz"),
            PairOutcome::BelowThreshold(_)
        ));
    }

    #[test]
    fn test_ranking() {
        let strategy = OrthographicMatch::with_config(MatchConfig {
            parallel: false,
            ..Default::default()
        });
        let first = sterilize_group(&[("star".to_string(), 1.0)]);
        let second = sterilize_group(&[
            ("start".to_string(), 1.0),
            ("tar".to_string(), 2.0),
            ("moon".to_string(), 5.0),
        ]);
        let matches = strategy.find_matches(&prioritized_pairs(&first, &second));
        let ranked: Vec<(&str, f64)> = matches
            .iter()
            .map(|m: &Prioritized<_>| (m.value.second.as_str(), m.priority))
            .collect();
        // tar: 2 * 3, start: 1 * 4.
        assert_eq!(ranked, vec![("tar", 6.0), ("start", 4.0)]);
    }
}
