//! Words as parallel, chunk-aligned spelling and pronunciation.
//!
//! A [`PhoneticWord`] stores chunk `i` of its spelling next to chunk `i` of its
//! pronunciation. For "cat" the chunks are `c/K`, `a/AE1`, `t/T`; a silent
//! letter is a chunk with no phonemes and an inserted sound is a chunk with no
//! graphemes.

use std::fmt;
use std::ops::{Add, Range};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordfuseError};
use crate::phonetics::diphthong;
use crate::phonetics::phoneme::{Grapheme, Phoneme};

/// Stored placeholder for a chunk with no spelling.
pub const NO_SPELLING: &str = "-";
/// Stored placeholder for a chunk with no sound.
pub const NO_SOUND: &str = "_";
/// Separator between the components of one stored chunk.
pub const CHUNK_SEPARATOR: char = '|';

/// One data-source entry: pipe-delimited chunks of spelling and sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWord {
    pub graphemes: Vec<String>,
    pub phonemes: Vec<String>,
}

impl StoredWord {
    pub fn new<G, P>(graphemes: G, phonemes: P) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        StoredWord {
            graphemes: graphemes.into_iter().map(Into::into).collect(),
            phonemes: phonemes.into_iter().map(Into::into).collect(),
        }
    }
}

/// The stress-marked phoneme a rhyme hinges on, and everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeEnding {
    pub stressed: Phoneme,
    pub suffix: Vec<Phoneme>,
}

impl RhymeEnding {
    /// The stressed phoneme followed by the suffix.
    pub fn phonemes(&self) -> Vec<Phoneme> {
        let mut phonemes = Vec::with_capacity(self.suffix.len() + 1);
        phonemes.push(self.stressed.clone());
        phonemes.extend(self.suffix.iter().cloned());
        phonemes
    }
}

/// A word as aligned chunks of graphemes and phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneticWord {
    graphemes: Vec<Vec<Grapheme>>,
    phonemes: Vec<Vec<Phoneme>>,
}

impl PhoneticWord {
    /// Build a word from already-decomposed chunks. Diphthongs are left as is.
    pub fn new(graphemes: Vec<Vec<Grapheme>>, phonemes: Vec<Vec<Phoneme>>) -> Result<Self> {
        if graphemes.len() != phonemes.len() {
            return Err(WordfuseError::shape_mismatch(
                graphemes.len(),
                phonemes.len(),
            ));
        }
        Ok(PhoneticWord {
            graphemes,
            phonemes,
        })
    }

    /// Build a word and decompose its licensed diphthongs.
    pub fn unrolled(graphemes: Vec<Vec<Grapheme>>, phonemes: Vec<Vec<Phoneme>>) -> Result<Self> {
        let mut word = Self::new(graphemes, phonemes)?;
        word.unroll_diphthongs();
        Ok(word)
    }

    /// Parse the stored form of a word and decompose its diphthongs.
    pub fn from_stored(stored: &StoredWord) -> Result<Self> {
        let graphemes = stored
            .graphemes
            .iter()
            .map(|chunk| split_chunk(chunk, NO_SPELLING))
            .collect();
        let phonemes = stored
            .phonemes
            .iter()
            .map(|chunk| {
                split_chunk(chunk, NO_SOUND)
                    .into_iter()
                    .map(Phoneme::new)
                    .collect()
            })
            .collect();
        Self::unrolled(graphemes, phonemes)
    }

    /// Split every chunk holding a single licensed diphthong into two chunks.
    ///
    /// One forward pass; chunks produced by a split are not revisited.
    pub fn unroll_diphthongs(&mut self) {
        let needs_split = self.chunks().any(|(graphemes, phonemes)| {
            phonemes.len() == 1 && diphthong::unroll_spelled(&phonemes[0], graphemes).is_some()
        });
        if !needs_split {
            return;
        }

        let mut graphemes = Vec::with_capacity(self.graphemes.len() + 1);
        let mut phonemes = Vec::with_capacity(self.phonemes.len() + 1);
        for (grapheme_chunk, phoneme_chunk) in self.graphemes.drain(..).zip(self.phonemes.drain(..))
        {
            let split = match phoneme_chunk.as_slice() {
                [single] => diphthong::unroll_spelled(single, &grapheme_chunk),
                _ => None,
            };
            match split {
                Some([first, second]) => {
                    // Licensed spellings always have two grapheme slots.
                    for (grapheme, sound) in grapheme_chunk.into_iter().zip([first, second]) {
                        graphemes.push(vec![grapheme]);
                        phonemes.push(sound);
                    }
                }
                None => {
                    graphemes.push(grapheme_chunk);
                    phonemes.push(phoneme_chunk);
                }
            }
        }
        log::trace!("unrolled diphthongs into {} chunks", graphemes.len());
        self.graphemes = graphemes;
        self.phonemes = phonemes;
    }

    pub fn graphemes(&self) -> &[Vec<Grapheme>] {
        &self.graphemes
    }

    pub fn phonemes(&self) -> &[Vec<Phoneme>] {
        &self.phonemes
    }

    /// Iterate over `(graphemes, phonemes)` chunk pairs.
    pub fn chunks(&self) -> impl Iterator<Item = (&[Grapheme], &[Phoneme])> {
        self.graphemes
            .iter()
            .map(Vec::as_slice)
            .zip(self.phonemes.iter().map(Vec::as_slice))
    }

    pub fn chunk_count(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    /// All phonemes in order, ignoring chunk boundaries.
    pub fn unaligned_phonemes(&self) -> Vec<Phoneme> {
        self.phonemes.iter().flatten().cloned().collect()
    }

    /// All graphemes in order, ignoring chunk boundaries.
    pub fn unaligned_graphemes(&self) -> Vec<Grapheme> {
        self.graphemes.iter().flatten().cloned().collect()
    }

    /// Copy out a range of chunks. Diphthongs are not unrolled again.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    pub fn slice(&self, range: Range<usize>) -> PhoneticWord {
        PhoneticWord {
            graphemes: self.graphemes[range.clone()].to_vec(),
            phonemes: self.phonemes[range].to_vec(),
        }
    }

    /// Total number of phonemes across all chunks.
    pub fn phoneme_count(&self) -> usize {
        self.phonemes.iter().map(Vec::len).sum()
    }

    /// Chunk holding the `flat`-th phoneme and its offset inside that chunk.
    ///
    /// Chunks without phonemes never hold one. Returns `None` past the end.
    pub fn locate_phoneme(&self, flat: usize) -> Option<(usize, usize)> {
        let mut before = 0;
        for (chunk, phonemes) in self.phonemes.iter().enumerate() {
            if flat < before + phonemes.len() {
                return Some((chunk, flat - before));
            }
            before += phonemes.len();
        }
        None
    }

    /// Flat phoneme index of `offset` inside `chunk`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is past the last chunk.
    pub fn phoneme_index(&self, chunk: usize, offset: usize) -> usize {
        self.phonemes[..chunk].iter().map(Vec::len).sum::<usize>() + offset
    }

    /// Chunk index where a cut before the `flat`-th phoneme falls.
    ///
    /// Chunks without phonemes stay with the phoneme that follows them, and a
    /// cut inside a multi-phoneme chunk moves to the end of that chunk.
    pub fn chunk_boundary(&self, flat: usize) -> usize {
        if flat == 0 {
            return 0;
        }
        if flat >= self.phoneme_count() {
            return self.chunk_count();
        }
        match self.locate_phoneme(flat - 1) {
            Some((chunk, _)) => chunk + 1,
            None => self.chunk_count(),
        }
    }

    /// Copy out the chunks covering a range of flat phoneme indices, such as
    /// the prefix lengths reported by an alignment.
    ///
    /// Cutting a word at every phoneme index `k` gives two slices that
    /// concatenate back to the word.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or ends past the last phoneme.
    pub fn slice_by_phonemes(&self, range: Range<usize>) -> PhoneticWord {
        assert!(
            range.start <= range.end && range.end <= self.phoneme_count(),
            "phoneme range {range:?} out of bounds for {} phonemes",
            self.phoneme_count()
        );
        self.slice(self.chunk_boundary(range.start)..self.chunk_boundary(range.end))
    }

    /// Chunk-list concatenation.
    pub fn concat(&self, other: &PhoneticWord) -> PhoneticWord {
        let mut joined = self.clone();
        joined.graphemes.extend(other.graphemes.iter().cloned());
        joined.phonemes.extend(other.phonemes.iter().cloned());
        joined
    }

    /// Concatenate two words with an empty chunk marking the word boundary.
    pub fn join_words(&self, other: &PhoneticWord) -> PhoneticWord {
        let mut joined = self.clone();
        joined.graphemes.push(Vec::new());
        joined.phonemes.push(Vec::new());
        joined.graphemes.extend(other.graphemes.iter().cloned());
        joined.phonemes.extend(other.phonemes.iter().cloned());
        joined
    }

    /// The strongest-stressed phoneme and every phoneme after it.
    ///
    /// On ties the later phoneme wins. Returns `None` when no phoneme carries a
    /// stress marker.
    pub fn rhyme_ending(&self) -> Option<RhymeEnding> {
        let phonemes = self.unaligned_phonemes();
        let (index, strongest) = phonemes
            .iter()
            .enumerate()
            .rev()
            .fold(None::<(usize, u8)>, |best, (index, phoneme)| {
                let strength = phoneme.strength();
                match best {
                    Some((_, best_strength)) if best_strength >= strength => best,
                    _ => Some((index, strength)),
                }
            })?;
        if strongest == 0 {
            return None;
        }
        Some(RhymeEnding {
            stressed: phonemes[index].clone(),
            suffix: phonemes[index + 1..].to_vec(),
        })
    }
}

fn split_chunk(chunk: &str, placeholder: &str) -> Vec<String> {
    if chunk == placeholder {
        Vec::new()
    } else {
        chunk.split(CHUNK_SEPARATOR).map(str::to_string).collect()
    }
}

impl Add for PhoneticWord {
    type Output = PhoneticWord;

    fn add(mut self, other: PhoneticWord) -> PhoneticWord {
        self.graphemes.extend(other.graphemes);
        self.phonemes.extend(other.phonemes);
        self
    }
}

impl fmt::Display for PhoneticWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grapheme_line = Vec::with_capacity(self.chunk_count());
        let mut phoneme_line = Vec::with_capacity(self.chunk_count());
        for (graphemes, phonemes) in self.chunks() {
            let spelled = graphemes.join(" ");
            let sounded = phonemes
                .iter()
                .map(Phoneme::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let width = spelled.chars().count().max(sounded.chars().count());
            grapheme_line.push(format!("{spelled:^width$}"));
            phoneme_line.push(format!("{sounded:^width$}"));
        }
        write!(f, "{}\n{}", grapheme_line.join("|"), phoneme_line.join("|"))
    }
}
