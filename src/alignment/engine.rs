//! Generalized Smith-Waterman / Needleman-Wunsch alignment.
//!
//! The engine aligns two sequences of arbitrary elements under a pluggable
//! [`Scoring`]. Global mode is classic Needleman-Wunsch. Local mode differs
//! from textbook Smith-Waterman in two ways:
//!
//! - cell scores have no zero floor, so they may go negative;
//! - the alignment may only end on the last row or the last column, i.e. at a
//!   point where at least one of the two sequences is fully consumed.
//!
//! Together these favour alignments where only one word has unmatched content
//! before the match and only one word has unmatched content after it, which is
//! what splicing two words together at the match requires.

use serde::{Deserialize, Serialize};

use crate::alignment::scoring::Scoring;

/// Which alignment problem to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Best alignment ending where one sequence is exhausted.
    #[default]
    Local,
    /// End-to-end alignment of both sequences.
    Global,
}

/// Where a cell's score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trace {
    Stop,
    Left,
    Up,
    Diagonal,
}

/// Result of aligning two sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment<T> {
    /// Aligned elements of the first sequence, with gap placeholders.
    pub first: Vec<T>,
    /// Aligned elements of the second sequence, with gap placeholders.
    pub second: Vec<T>,
    pub score: i32,
    /// Cell where traceback stopped: elements of each sequence before the match.
    pub start: (usize, usize),
    /// Cell the traceback started from: elements of each sequence consumed by
    /// the end of the match.
    pub end: (usize, usize),
}

impl<T> Alignment<T> {
    /// Number of aligned columns.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Aligned columns as pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        self.first.iter().zip(self.second.iter())
    }

    /// Convert every aligned element, e.g. for display.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Alignment<U> {
        Alignment {
            first: self.first.iter().map(&mut f).collect(),
            second: self.second.iter().map(&mut f).collect(),
            score: self.score,
            start: self.start,
            end: self.end,
        }
    }
}

/// Pairwise sequence aligner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    mode: AlignmentMode,
}

impl Aligner {
    pub fn new(mode: AlignmentMode) -> Self {
        Aligner { mode }
    }

    pub fn local() -> Self {
        Self::new(AlignmentMode::Local)
    }

    pub fn global() -> Self {
        Self::new(AlignmentMode::Global)
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Align `seq1` against `seq2`.
    ///
    /// `gap` builds the placeholder emitted opposite an unmatched element.
    /// Runs in O(len1 × len2) time and space. Equal candidate scores are
    /// resolved left, then up, then diagonal; equal endpoint scores keep the
    /// first cell in row-major order.
    #[allow(clippy::needless_range_loop)]
    pub fn align<T, S, G>(&self, seq1: &[T], seq2: &[T], scoring: &S, gap: G) -> Alignment<T>
    where
        T: Clone,
        S: Scoring<T> + ?Sized,
        G: Fn() -> T,
    {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let global = self.mode == AlignmentMode::Global;

        let mut scores = vec![vec![0i32; cols]; rows];
        let mut traces = vec![vec![Trace::Stop; cols]; rows];

        // Global alignment pays for every element skipped before the first match.
        if global {
            for i in 1..rows {
                scores[i][0] = scores[i - 1][0] - scoring.skip_cost(&seq1[i - 1]);
                traces[i][0] = Trace::Up;
            }
            for j in 1..cols {
                scores[0][j] = scores[0][j - 1] - scoring.skip_cost(&seq2[j - 1]);
                traces[0][j] = Trace::Left;
            }
        }

        let mut best: Option<(i32, (usize, usize))> = None;

        for i in 1..rows {
            for j in 1..cols {
                let diagonal =
                    scores[i - 1][j - 1] + scoring.similarity(&seq1[i - 1], &seq2[j - 1]);
                let up = scores[i - 1][j] - scoring.skip_cost(&seq1[i - 1]);
                let left = scores[i][j - 1] - scoring.skip_cost(&seq2[j - 1]);

                let score = diagonal.max(up).max(left);
                scores[i][j] = score;
                traces[i][j] = if score == left {
                    Trace::Left
                } else if score == up {
                    Trace::Up
                } else {
                    Trace::Diagonal
                };

                let on_border = i == rows - 1 || j == cols - 1;
                if !global && on_border && best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, (i, j)));
                }
            }
        }

        let (score, end) = if global {
            (scores[rows - 1][cols - 1], (rows - 1, cols - 1))
        } else {
            // Only reachable when one of the sequences is empty.
            best.unwrap_or((0, (0, 0)))
        };

        let mut first = Vec::new();
        let mut second = Vec::new();
        let (mut i, mut j) = end;
        loop {
            match traces[i][j] {
                Trace::Stop => break,
                Trace::Diagonal => {
                    first.push(seq1[i - 1].clone());
                    second.push(seq2[j - 1].clone());
                    i -= 1;
                    j -= 1;
                }
                Trace::Up => {
                    first.push(seq1[i - 1].clone());
                    second.push(gap());
                    i -= 1;
                }
                Trace::Left => {
                    first.push(gap());
                    second.push(seq2[j - 1].clone());
                    j -= 1;
                }
            }
        }
        first.reverse();
        second.reverse();

        Alignment {
            first,
            second,
            score,
            start: (i, j),
            end,
        }
    }
}
