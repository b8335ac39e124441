//! Token to pronunciation lookup.
//!
//! The dictionary is backed by a read-only table of [`StoredWord`]s. Phrases
//! that are not in the table verbatim ("ice cream truck", "rock-n-roll") are
//! pronounced by splitting them into a known head and a recursively pronounced
//! tail.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use regex::Regex;

use crate::error::{Result, WordfuseError};
use crate::phonetics::word::{PhoneticWord, StoredWord};

lazy_static! {
    static ref TOKEN_SEPARATOR: Regex = Regex::new(r"[^a-z']+").unwrap();
}

/// Joins sub-tokens into a compound dictionary key.
pub const COMPOUND_JOINER: &str = "-";

/// Default number of memoized token sequences.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// A read-only phonetic dictionary with a memo of resolved phrases.
///
/// Safe to share between threads: the memo sits behind a lock. The memo holds
/// failed resolutions too and is emptied whenever it reaches its capacity.
#[derive(Debug)]
pub struct PhoneticDictionary {
    entries: AHashMap<String, StoredWord>,
    resolved: RwLock<AHashMap<Vec<String>, Option<PhoneticWord>>>,
    cache_capacity: usize,
}

impl Default for PhoneticDictionary {
    fn default() -> Self {
        Self::from_entries(Vec::<(String, StoredWord)>::new())
    }
}

impl PhoneticDictionary {
    /// Build a dictionary from `(token, stored word)` pairs.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, StoredWord)>,
        K: Into<String>,
    {
        PhoneticDictionary {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            resolved: RwLock::new(AHashMap::new()),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Bound the memo of resolved phrases. A capacity of 0 disables it.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Parse a JSON object mapping tokens to `{"graphemes": [..], "phonemes": [..]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: AHashMap<String, StoredWord> = serde_json::from_str(json).map_err(|e| {
            WordfuseError::dictionary(format!("Failed to parse phonetic dictionary JSON: {e}"))
        })?;
        log::debug!("parsed phonetic dictionary with {} entries", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// Load a dictionary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        log::debug!("loading phonetic dictionary from {}", path.display());
        Self::from_json_str(&content)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All tokens in the table, in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Exact-key lookup.
    pub fn lookup(&self, token: &str) -> Result<PhoneticWord> {
        let stored = self
            .entries
            .get(token)
            .ok_or_else(|| WordfuseError::unknown_word(token))?;
        PhoneticWord::from_stored(stored)
    }

    /// Pronounce a word or phrase.
    ///
    /// Returns `None` when the phrase cannot be assembled from dictionary
    /// entries or assembles to no phonemes at all.
    pub fn pronounce(&self, phrase: &str) -> Option<PhoneticWord> {
        let tokens = normalize(phrase);
        if tokens.is_empty() {
            return None;
        }
        self.resolve(&tokens)
            .filter(|word| word.phonemes().iter().any(|chunk| !chunk.is_empty()))
    }

    /// Number of memoized token sequences.
    pub fn cached_resolutions(&self) -> usize {
        self.resolved.read().len()
    }

    pub fn clear_cache(&self) {
        self.resolved.write().clear();
    }

    fn remember(&self, tokens: &[String], resolved: &Option<PhoneticWord>) {
        if self.cache_capacity == 0 {
            return;
        }
        let mut memo = self.resolved.write();
        if memo.len() >= self.cache_capacity {
            log::debug!("resolution memo full at {} entries, clearing", memo.len());
            memo.clear();
        }
        memo.insert(tokens.to_vec(), resolved.clone());
    }

    /// Resolve a token sequence, trying the longest known head first.
    ///
    /// For `[a, b, c]` the heads tried are `a-b-c`, `a-b`, `a`; the tail after a
    /// head is resolved the same way. Head and tail are joined with an empty
    /// boundary chunk.
    fn resolve(&self, tokens: &[String]) -> Option<PhoneticWord> {
        if let Some(cached) = self.resolved.read().get(tokens) {
            log::trace!("memo hit for {tokens:?}");
            return cached.clone();
        }

        let resolved = (1..=tokens.len()).rev().find_map(|head_len| {
            let (head, tail) = tokens.split_at(head_len);
            let head = self.lookup(&head.join(COMPOUND_JOINER)).ok()?;
            if tail.is_empty() {
                Some(head)
            } else {
                self.resolve(tail).map(|tail| head.join_words(&tail))
            }
        });

        self.remember(tokens, &resolved);
        resolved
    }
}

/// Lowercase a phrase and split it into dictionary tokens.
pub fn normalize(phrase: &str) -> Vec<String> {
    let lowered = phrase.to_lowercase();
    TOKEN_SEPARATOR
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::phoneme::Phoneme;

    fn entry(token: &str, graphemes: &[&str], phonemes: &[&str]) -> (String, StoredWord) {
        (
            token.to_string(),
            StoredWord::new(graphemes.iter().copied(), phonemes.iter().copied()),
        )
    }

    fn sample() -> PhoneticDictionary {
        PhoneticDictionary::from_entries(vec![
            entry("ice", &["i", "c|e"], &["AY1", "S"]),
            entry("cream", &["c", "r", "ea", "m"], &["K", "R", "IY1", "M"]),
            entry(
                "ice-cream",
                &["i", "c|e", "c", "r", "ea", "m"],
                &["AY1", "S", "K", "R", "IY2", "M"],
            ),
            entry("truck", &["t", "r", "u", "ck"], &["T", "R", "AH1", "K"]),
            entry("don't", &["d", "o", "n", "'", "t"], &["D", "OW1", "N", "_", "T"]),
            entry("h", &["h"], &["_"]),
        ])
    }

    fn symbols(word: &PhoneticWord) -> Vec<String> {
        word.unaligned_phonemes()
            .iter()
            .map(Phoneme::to_string)
            .collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Ice  Cream!"), vec!["ice", "cream"]);
        assert_eq!(normalize("rock-n-roll"), vec!["rock", "n", "roll"]);
        assert_eq!(normalize("Don't"), vec!["don't"]);
        assert!(normalize(" 123 ").is_empty());
    }

    #[test]
    fn test_lookup() {
        let dictionary = sample();
        assert_eq!(symbols(&dictionary.lookup("truck").unwrap()), vec!["T", "R", "AH1", "K"]);
        match dictionary.lookup("spoon") {
            Err(WordfuseError::UnknownWord(word)) => assert_eq!(word, "spoon"),
            other => panic!("Expected unknown word, got {other:?}"),
        }
    }

    #[test]
    fn test_pronounce_verbatim_matches_lookup() {
        let dictionary = sample();
        for token in ["ice", "cream", "truck", "don't", "ice-cream"] {
            let pronounced = dictionary.pronounce(token).unwrap();
            let looked_up = dictionary.lookup(token).unwrap();
            assert_eq!(pronounced.unaligned_phonemes(), looked_up.unaligned_phonemes());
        }
    }

    #[test]
    fn test_pronounce_prefers_longest_head() {
        let dictionary = sample();
        let word = dictionary.pronounce("ice cream truck").unwrap();
        // "ice-cream" (secondary stress on IY) wins over "ice" + "cream".
        assert_eq!(symbols(&word), vec!["AY1", "S", "K", "R", "IY2", "M", "T", "R", "AH1", "K"]);
        // One boundary chunk between the compound and "truck".
        assert_eq!(word.chunk_count(), 6 + 1 + 4);
    }

    #[test]
    fn test_pronounce_falls_back_to_shorter_heads() {
        let dictionary = sample();
        let word = dictionary.pronounce("truck cream").unwrap();
        assert_eq!(symbols(&word), vec!["T", "R", "AH1", "K", "K", "R", "IY1", "M"]);
    }

    #[test]
    fn test_pronounce_failures() {
        let dictionary = sample();
        assert!(dictionary.pronounce("spoon").is_none());
        assert!(dictionary.pronounce("ice spoon").is_none());
        assert!(dictionary.pronounce("").is_none());
        // Resolves, but to no phonemes at all.
        assert!(dictionary.pronounce("h").is_none());
    }

    #[test]
    fn test_memoization() {
        let dictionary = sample();
        dictionary.pronounce("truck ice cream");
        let cached = dictionary.cached_resolutions();
        assert!(cached >= 2);

        dictionary.pronounce("truck ice cream");
        assert_eq!(dictionary.cached_resolutions(), cached);

        dictionary.clear_cache();
        assert_eq!(dictionary.cached_resolutions(), 0);
    }

    #[test]
    fn test_memo_is_bounded() {
        let dictionary = sample().with_cache_capacity(2);
        assert_eq!(dictionary.cache_capacity(), 2);
        for phrase in ["truck ice cream", "cream truck", "ice truck cream", "spoon"] {
            dictionary.pronounce(phrase);
            assert!(dictionary.cached_resolutions() <= 2);
        }
        // Results do not depend on what the memo still holds.
        let word = dictionary.pronounce("truck ice cream").unwrap();
        assert_eq!(
            symbols(&word),
            vec!["T", "R", "AH1", "K", "AY1", "S", "K", "R", "IY2", "M"]
        );

        let uncached = sample().with_cache_capacity(0);
        assert!(uncached.pronounce("ice cream truck").is_some());
        assert_eq!(uncached.cached_resolutions(), 0);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "cat": {"graphemes": ["c", "a", "t"], "phonemes": ["K", "AE1", "T"]}
        }"#;
        let dictionary = PhoneticDictionary::from_json_str(json).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("cat"));
        assert_eq!(dictionary.tokens().collect::<Vec<_>>(), vec!["cat"]);

        let bad = PhoneticDictionary::from_json_str(r#"{"cat": ["c", "a", "t"]}"#);
        assert!(matches!(bad, Err(WordfuseError::Dictionary(_))));
    }
}
