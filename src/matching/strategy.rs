//! Shared scaffolding for match strategies.
//!
//! Every strategy consumes the cartesian product of two weighted token groups
//! and ranks the pairs that align well. Only the per-pair evaluation differs,
//! so it is the single required method of [`MatchStrategy`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::error::{Result, WordfuseError};
use crate::matching::config::{MatchConfig, is_printable};
use crate::matching::orthographic::OrthographicMatch;
use crate::matching::phonetic::PhoneticMatch;
use crate::matching::rhyme::RhymeMatch;
use crate::phonetics::dictionary::PhoneticDictionary;

/// A value with a priority; higher priorities rank first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prioritized<T> {
    pub value: T,
    pub priority: f64,
}

impl<T> Prioritized<T> {
    pub fn new(value: T, priority: f64) -> Self {
        Prioritized { value, priority }
    }
}

/// Two tokens that might combine.
pub type PotentialMatch = (String, String);

/// Rendered alignment of a matched pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDescriptor {
    pub aligned_first: Vec<String>,
    pub aligned_second: Vec<String>,
    pub score: i32,
    /// Traceback terminal cell, i.e. unmatched prefix length of each token.
    pub start: (usize, usize),
}

impl MatchDescriptor {
    pub fn from_alignment<T: fmt::Display>(alignment: &Alignment<T>) -> Self {
        let rendered = alignment.map(ToString::to_string);
        MatchDescriptor {
            aligned_first: rendered.first,
            aligned_second: rendered.second,
            score: alignment.score,
            start: alignment.start,
        }
    }
}

impl fmt::Display for MatchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {} {}",
            self.aligned_first.join(", "),
            self.aligned_second.join(", "),
            self.start.0,
            self.start.1
        )
    }
}

/// A combinable pair of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub first: String,
    pub second: String,
    pub descriptor: MatchDescriptor,
}

/// What happened to one candidate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// A token was unprintable or too long.
    Filtered,
    /// A token has no usable pronunciation.
    Unpronounceable,
    /// Rejected before alignment.
    Prefiltered,
    /// Aligned, but did not beat the threshold.
    BelowThreshold(i32),
    /// Aligned and kept.
    Matched(MatchDescriptor),
}

impl PairOutcome {
    /// Judge an alignment against the score threshold.
    pub fn from_alignment<T: fmt::Display>(alignment: &Alignment<T>, config: &MatchConfig) -> Self {
        if alignment.score > config.min_score {
            PairOutcome::Matched(MatchDescriptor::from_alignment(alignment))
        } else {
            PairOutcome::BelowThreshold(alignment.score)
        }
    }

    /// Whether the alignment engine ran for this pair.
    pub fn was_aligned(&self) -> bool {
        matches!(self, PairOutcome::BelowThreshold(_) | PairOutcome::Matched(_))
    }
}

/// Per-batch outcome counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub pairs: usize,
    pub filtered: usize,
    pub unpronounceable: usize,
    pub prefiltered: usize,
    /// Number of alignment engine invocations.
    pub aligned: usize,
    pub matched: usize,
}

impl MatchStats {
    fn record(&mut self, outcome: &PairOutcome) {
        self.pairs += 1;
        match outcome {
            PairOutcome::Filtered => self.filtered += 1,
            PairOutcome::Unpronounceable => self.unpronounceable += 1,
            PairOutcome::Prefiltered => self.prefiltered += 1,
            PairOutcome::BelowThreshold(_) => self.aligned += 1,
            PairOutcome::Matched(_) => {
                self.aligned += 1;
                self.matched += 1;
            }
        }
    }
}

/// A way of finding combinable word pairs.
pub trait MatchStrategy: Send + Sync {
    /// Short identifier, e.g. `"phonetic"`.
    fn name(&self) -> &'static str;

    /// One-line human description.
    fn description(&self) -> &'static str;

    fn config(&self) -> &MatchConfig;

    /// Evaluate one pair of printable tokens.
    fn evaluate_pair(&self, first: &str, second: &str) -> PairOutcome;

    /// Rank the pairs that match, highest priority first.
    fn find_matches(&self, options: &[Prioritized<PotentialMatch>]) -> Vec<Prioritized<Match>> {
        self.find_matches_with_stats(options).0
    }

    /// Like [`MatchStrategy::find_matches`], also reporting outcome counts.
    fn find_matches_with_stats(
        &self,
        options: &[Prioritized<PotentialMatch>],
    ) -> (Vec<Prioritized<Match>>, MatchStats) {
        let config = self.config();
        let evaluate = |option: &Prioritized<PotentialMatch>| {
            let (first, second) = &option.value;
            if config.accepts_token(first) && config.accepts_token(second) {
                self.evaluate_pair(first, second)
            } else {
                PairOutcome::Filtered
            }
        };
        let outcomes: Vec<PairOutcome> = if config.parallel {
            options.par_iter().map(evaluate).collect()
        } else {
            options.iter().map(evaluate).collect()
        };

        let mut stats = MatchStats::default();
        let mut matches = Vec::new();
        for (option, outcome) in options.iter().zip(outcomes) {
            stats.record(&outcome);
            log::trace!("{}: {:?} -> {:?}", self.name(), option.value, outcome);
            if let PairOutcome::Matched(descriptor) = outcome {
                let (first, second) = option.value.clone();
                let priority = option.priority * descriptor.score as f64;
                matches.push(Prioritized::new(
                    Match {
                        first,
                        second,
                        descriptor,
                    },
                    priority,
                ));
            }
        }

        // Stable, so equal priorities keep pair order.
        matches.sort_by(|a, b| {
            b.priority
                .partial_cmp(&a.priority)
                .unwrap_or(Ordering::Equal)
        });
        log::debug!(
            "{}: {} pairs, {} aligned, {} matched",
            self.name(),
            stats.pairs,
            stats.aligned,
            stats.matched
        );
        (matches, stats)
    }

    /// Match every token of `first_group` against every token of `second_group`.
    fn analyze_groups(
        &self,
        first_group: &[(String, f64)],
        second_group: &[(String, f64)],
    ) -> Vec<Prioritized<Match>> {
        self.find_matches(&prioritized_pairs(
            &sterilize_group(first_group),
            &sterilize_group(second_group),
        ))
    }
}

/// Keep the printable tokens of a weighted group.
pub fn sterilize_group(group: &[(String, f64)]) -> Vec<Prioritized<String>> {
    group
        .iter()
        .filter(|(token, _)| is_printable(token))
        .map(|(token, weight)| Prioritized::new(token.clone(), *weight))
        .collect()
}

/// Cartesian product of two groups; a pair's priority is the product of weights.
pub fn prioritized_pairs(
    first: &[Prioritized<String>],
    second: &[Prioritized<String>],
) -> Vec<Prioritized<PotentialMatch>> {
    first
        .iter()
        .flat_map(|x| {
            second.iter().map(move |y| {
                Prioritized::new((x.value.clone(), y.value.clone()), x.priority * y.priority)
            })
        })
        .collect()
}

/// The available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Orthographic,
    Phonetic,
    Rhyme,
}

impl MatchKind {
    pub fn all() -> [MatchKind; 3] {
        [MatchKind::Orthographic, MatchKind::Phonetic, MatchKind::Rhyme]
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchKind::Orthographic => "orthographic",
            MatchKind::Phonetic => "phonetic",
            MatchKind::Rhyme => "rhyme",
        }
    }

    /// Build the strategy with default scoring.
    pub fn build(
        self,
        dictionary: Arc<PhoneticDictionary>,
        config: MatchConfig,
    ) -> Result<Box<dyn MatchStrategy>> {
        config.validate()?;
        let strategy: Box<dyn MatchStrategy> = match self {
            MatchKind::Orthographic => Box::new(OrthographicMatch::with_config(config)),
            MatchKind::Phonetic => Box::new(PhoneticMatch::with_config(dictionary, config)),
            MatchKind::Rhyme => Box::new(RhymeMatch::with_config(dictionary, config)),
        };
        Ok(strategy)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MatchKind {
    type Err = WordfuseError;

    fn from_str(s: &str) -> Result<Self> {
        MatchKind::all()
            .into_iter()
            .find(|kind| kind.name() == s.to_lowercase())
            .ok_or_else(|| WordfuseError::invalid_argument(format!("Unknown match kind: {s}")))
    }
}
