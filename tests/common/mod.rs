//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use wordfuse::phonetics::PhoneticDictionary;

/// A small dictionary in the on-disk JSON format.
pub const FIXTURE_JSON: &str = r#"{
    "cat":       {"graphemes": ["c", "a", "t"], "phonemes": ["K", "AE1", "T"]},
    "hat":       {"graphemes": ["h", "a", "t"], "phonemes": ["HH", "AE1", "T"]},
    "day":       {"graphemes": ["d", "a|y"], "phonemes": ["D", "AY1"]},
    "may":       {"graphemes": ["m", "a|y"], "phonemes": ["M", "AY1"]},
    "ice":       {"graphemes": ["i", "c|e"], "phonemes": ["AY1", "S"]},
    "cream":     {"graphemes": ["c", "r", "ea", "m"], "phonemes": ["K", "R", "IY1", "M"]},
    "ice-cream": {
        "graphemes": ["i", "c|e", "c", "r", "ea", "m"],
        "phonemes": ["AY1", "S", "K", "R", "IY2", "M"]
    },
    "truck":     {"graphemes": ["t", "r", "u", "ck"], "phonemes": ["T", "R", "AH1", "K"]},
    "moon":      {"graphemes": ["m", "oo", "n"], "phonemes": ["M", "UW1", "N"]},
    "spoon":     {"graphemes": ["s", "p", "oo", "n"], "phonemes": ["S", "P", "UW1", "N"]},
    "knight":    {"graphemes": ["k", "n", "igh", "t"], "phonemes": ["_", "N", "AY1", "T"]}
}"#;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dictionary() -> Arc<PhoneticDictionary> {
    Arc::new(PhoneticDictionary::from_json_str(FIXTURE_JSON).unwrap())
}

pub fn group(tokens: &[(&str, f64)]) -> Vec<(String, f64)> {
    tokens
        .iter()
        .map(|(token, weight)| (token.to_string(), *weight))
        .collect()
}
