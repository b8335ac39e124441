//! Vowel stress markers and their ordering.
//!
//! ARPABET vowels carry a trailing digit: `1` for primary stress, `2` for
//! secondary stress and `0` for no stress. Comparing stress therefore needs a
//! strength ordering that differs from the digit ordering.

use std::fmt;

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Stress level of a vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stress {
    Unstressed,
    Secondary,
    Primary,
}

/// Marker digit and strength for every stress level.
const STRESS_TABLE: [(char, u8); 3] = [('1', 3), ('2', 2), ('0', 1)];

lazy_static! {
    static ref MARKER_TO_STRENGTH: AHashMap<char, u8> = {
        let table: AHashMap<char, u8> = STRESS_TABLE.iter().copied().collect();
        let mut strengths: Vec<u8> = table.values().copied().collect();
        strengths.sort_unstable();
        let (min, max) = (strengths[0], strengths[strengths.len() - 1]);
        assert!(
            strengths == (min..=max).collect::<Vec<u8>>(),
            "stress strengths must be contiguous"
        );
        table
    };
    static ref STRENGTH_TO_MARKER: AHashMap<u8, char> = MARKER_TO_STRENGTH
        .iter()
        .map(|(&marker, &strength)| (strength, marker))
        .collect();
    static ref MIN_STRENGTH: u8 = MARKER_TO_STRENGTH.values().copied().min().unwrap_or(1);
    static ref MAX_STRENGTH: u8 = MARKER_TO_STRENGTH.values().copied().max().unwrap_or(1);
}

impl Stress {
    /// Parse a marker digit.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '0' => Some(Stress::Unstressed),
            '2' => Some(Stress::Secondary),
            '1' => Some(Stress::Primary),
            _ => None,
        }
    }

    /// The marker digit used in phoneme symbols.
    pub fn marker(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Secondary => '2',
            Stress::Primary => '1',
        }
    }

    /// Ordinal strength, higher is stronger.
    pub fn strength(self) -> u8 {
        MARKER_TO_STRENGTH[&self.marker()]
    }

    /// Add `delta` to the strength, saturating at the weakest and strongest levels.
    pub fn shift(self, delta: i32) -> Self {
        let shifted = (self.strength() as i32)
            .saturating_add(delta)
            .clamp(*MIN_STRENGTH as i32, *MAX_STRENGTH as i32) as u8;
        STRENGTH_TO_MARKER
            .get(&shifted)
            .and_then(|&marker| Stress::from_marker(marker))
            .unwrap_or(self)
    }
}

impl fmt::Display for Stress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Strength of a marker digit, `None` for anything that is not a marker.
pub fn strength(marker: char) -> Option<u8> {
    MARKER_TO_STRENGTH.get(&marker).copied()
}

/// Shift a marker digit by `delta` strength levels.
///
/// Unknown markers are returned unchanged.
pub fn shift(marker: char, delta: i32) -> char {
    Stress::from_marker(marker)
        .map(|stress| stress.shift(delta).marker())
        .unwrap_or(marker)
}

/// Strip the trailing stress digit of a phoneme symbol, if any.
pub fn ignore_stress(phoneme: &str) -> &str {
    match phoneme.chars().last() {
        Some(last) if last.is_ascii_digit() => &phoneme[..phoneme.len() - 1],
        _ => phoneme,
    }
}

/// Compare two phoneme symbols by base code only.
pub fn equal_ignoring_stress(a: &str, b: &str) -> bool {
    ignore_stress(a) == ignore_stress(b)
}

/// Stress strength of a phoneme symbol, 0 when it carries no marker.
pub fn phoneme_strength(phoneme: &str) -> u8 {
    phoneme.chars().last().and_then(strength).unwrap_or(0)
}
