//! Compound vowel phonemes and how they decompose.
//!
//! A diphthong such as `AY` in "day" can be split into two simpler sounds
//! (`AA` + `IH`) when its spelling has one letter per sound. Splitting lets the
//! aligner match half of a diphthong against a plain vowel in another word.

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::phonetics::phoneme::{Grapheme, Phoneme};

/// Decomposition of one diphthong.
#[derive(Debug, Clone, Copy)]
pub struct Diphthong {
    /// Base codes of the simpler phonemes, in order.
    pub phonemes: &'static [&'static str],
    /// Grapheme chunks that license the split.
    pub split_when: &'static [&'static [&'static str]],
}

impl Diphthong {
    /// Whether a grapheme chunk is one of the licensed spellings.
    pub fn licenses(&self, graphemes: &[Grapheme]) -> bool {
        self.split_when.iter().any(|spelling| {
            spelling.len() == graphemes.len()
                && spelling.iter().zip(graphemes).all(|(a, b)| *a == b.as_str())
        })
    }
}

lazy_static! {
    static ref DIPHTHONGS: AHashMap<&'static str, Diphthong> = {
        let mut table = AHashMap::new();
        table.insert(
            "AY",
            Diphthong {
                phonemes: &["AA", "IH"],
                split_when: &[&["a", "y"]],
            },
        );
        table.insert(
            "AW",
            Diphthong {
                phonemes: &["AA", "UH"],
                split_when: &[&["o", "u"], &["a", "u"], &["o", "w"]],
            },
        );
        table.insert(
            "OY",
            Diphthong {
                phonemes: &["AO", "IH"],
                split_when: &[&["o", "y"], &["o", "i"]],
            },
        );
        table.insert(
            "ER",
            Diphthong {
                phonemes: &["EH", "R"],
                split_when: &[&["e", "r"]],
            },
        );
        table
    };
}

/// Look up a diphthong by base code (stress already stripped).
pub fn lookup(base: &str) -> Option<&'static Diphthong> {
    DIPHTHONGS.get(base)
}

/// Whether a base code names a known diphthong.
pub fn is_diphthong(base: &str) -> bool {
    DIPHTHONGS.contains_key(base)
}

/// Split a stress-marked diphthong into two one-phoneme chunks.
///
/// The first vowel keeps the original stress and the second vowel gets one
/// level less; consonants carry no marker. Returns `None` when the phoneme is
/// not a diphthong or has no stress marker.
///
/// # Panics
///
/// Panics if the table entry does not decompose into exactly two phonemes.
pub fn unroll(phoneme: &Phoneme) -> Option<[Vec<Phoneme>; 2]> {
    let stress = phoneme.stress()?;
    let diphthong = lookup(phoneme.base())?;
    assert_eq!(
        diphthong.phonemes.len(),
        2,
        "diphthong {} must decompose into exactly two phonemes",
        phoneme.base()
    );

    let first = Phoneme::new(diphthong.phonemes[0]).with_stress(stress);
    let second = Phoneme::new(diphthong.phonemes[1]).with_stress(stress.shift(-1));
    Some([vec![first], vec![second]])
}

/// Like [`unroll`], but only when `graphemes` is a licensed spelling.
pub fn unroll_spelled(phoneme: &Phoneme, graphemes: &[Grapheme]) -> Option<[Vec<Phoneme>; 2]> {
    if !lookup(phoneme.base())?.licenses(graphemes) {
        return None;
    }
    unroll(phoneme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphemes(letters: &[&str]) -> Vec<Grapheme> {
        letters.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unroll_primary() {
        let [first, second] = unroll(&Phoneme::from("AY1")).unwrap();
        assert_eq!(first, vec![Phoneme::from("AA1")]);
        assert_eq!(second, vec![Phoneme::from("IH2")]);
    }

    #[test]
    fn test_unroll_unstressed_saturates() {
        let [first, second] = unroll(&Phoneme::from("AW0")).unwrap();
        assert_eq!(first, vec![Phoneme::from("AA0")]);
        assert_eq!(second, vec![Phoneme::from("UH0")]);
    }

    #[test]
    fn test_unroll_consonant_gets_no_stress() {
        let [first, second] = unroll(&Phoneme::from("ER1")).unwrap();
        assert_eq!(first, vec![Phoneme::from("EH1")]);
        assert_eq!(second, vec![Phoneme::from("R")]);
    }

    #[test]
    fn test_unroll_rejects_non_diphthongs() {
        assert!(unroll(&Phoneme::from("AE1")).is_none());
        assert!(unroll(&Phoneme::from("AY")).is_none());
        assert!(unroll(&Phoneme::from("K")).is_none());
    }

    #[test]
    fn test_licensed_spellings() {
        let ay = lookup("AY").unwrap();
        assert!(ay.licenses(&graphemes(&["a", "y"])));
        assert!(!ay.licenses(&graphemes(&["ay"])));
        assert!(!ay.licenses(&graphemes(&["i", "gh"])));

        assert!(unroll_spelled(&Phoneme::from("OY1"), &graphemes(&["o", "i"])).is_some());
        assert!(unroll_spelled(&Phoneme::from("OY1"), &graphemes(&["e", "i"])).is_none());
    }
}
