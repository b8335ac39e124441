//! Integration tests for ranking word pairs with each match strategy

mod common;

use wordfuse::matching::{MatchConfig, MatchKind, MatchStrategy, prioritized_pairs, sterilize_group};
use wordfuse::prelude::*;

fn ranked(matches: &[Prioritized<Match>]) -> Vec<(&str, &str, f64)> {
    matches
        .iter()
        .map(|m| (m.value.first.as_str(), m.value.second.as_str(), m.priority))
        .collect()
}

fn build(kind: MatchKind) -> Box<dyn MatchStrategy> {
    kind.build(common::dictionary(), MatchConfig::default())
        .unwrap()
}

#[test]
fn test_phonetic_groups() {
    common::init_logging();

    let strategy = build(MatchKind::Phonetic);
    let matches = strategy.analyze_groups(
        &common::group(&[("cat", 1.0), ("day", 2.0), ("café", 5.0)]),
        &common::group(&[("hat", 1.0), ("may", 1.0), ("zyzzyva", 3.0)]),
    );
    assert_eq!(ranked(&matches), vec![("day", "may", 4.0), ("cat", "hat", 2.0)]);
    assert_eq!(matches[1].value.descriptor.score, 2);
}

#[test]
fn test_rhyme_groups() {
    common::init_logging();

    let strategy = build(MatchKind::Rhyme);
    let matches = strategy.analyze_groups(
        &common::group(&[("cat", 1.0), ("day", 2.0)]),
        &common::group(&[("hat", 1.0), ("may", 1.0), ("moon", 1.0)]),
    );
    assert_eq!(ranked(&matches), vec![("day", "may", 4.0), ("cat", "hat", 2.0)]);
    assert_eq!(
        matches[0].value.descriptor.aligned_first,
        vec!["AA1", "IH2"]
    );
}

#[test]
fn test_rhyme_prefilter_counts() {
    let strategy = build(MatchKind::Rhyme);
    let pairs = prioritized_pairs(
        &sterilize_group(&common::group(&[("cat", 1.0), ("moon", 1.0)])),
        &sterilize_group(&common::group(&[("truck", 1.0), ("day", 1.0)])),
    );
    let (matches, stats) = strategy.find_matches_with_stats(&pairs);
    assert!(matches.is_empty());
    assert_eq!(stats.prefiltered, 4);
    assert_eq!(stats.aligned, 0);
}

#[test]
fn test_orthographic_groups() {
    let strategy = build(MatchKind::Orthographic);
    let matches = strategy.analyze_groups(
        &common::group(&[("star", 1.0)]),
        &common::group(&[("start", 1.0), ("tar", 2.0), ("moon", 4.0)]),
    );
    assert_eq!(ranked(&matches), vec![("star", "tar", 6.0), ("star", "start", 4.0)]);
    // "star" lines up with the first four letters of "start".
    assert_eq!(matches[1].value.descriptor.start, (0, 0));
}

#[test]
fn test_token_length_cap() {
    let config = MatchConfig {
        max_token_chars: Some(4),
        ..Default::default()
    };
    let strategy = MatchKind::Orthographic
        .build(common::dictionary(), config)
        .unwrap();
    let matches = strategy.analyze_groups(
        &common::group(&[("star", 1.0)]),
        &common::group(&[("start", 1.0), ("tar", 1.0)]),
    );
    assert_eq!(ranked(&matches), vec![("star", "tar", 3.0)]);
}

#[test]
fn test_invalid_config_rejected() {
    let config = MatchConfig {
        max_token_chars: Some(0),
        ..Default::default()
    };
    assert!(matches!(
        MatchKind::Phonetic.build(common::dictionary(), config),
        Err(WordfuseError::InvalidArgument(_))
    ));
}

#[test]
fn test_every_strategy_tolerates_bad_input() {
    for kind in MatchKind::all() {
        let strategy = build(kind);
        assert_eq!(strategy.name(), kind.name());
        assert!(!strategy.description().is_empty());

        let matches = strategy.analyze_groups(
            &common::group(&[("", 1.0), ("naïve", 1.0), ("zyzzyva", 1.0)]),
            &common::group(&[("qwxz", 1.0)]),
        );
        assert!(matches.is_empty());
        assert!(strategy.analyze_groups(&[], &[]).is_empty());
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let dictionary = common::dictionary();
    let first = common::group(&[("cat", 1.0), ("day", 2.0), ("moon", 0.5), ("ice cream", 1.0)]);
    let second = common::group(&[("hat", 1.0), ("may", 3.0), ("spoon", 2.0), ("cream", 1.0)]);

    for kind in MatchKind::all() {
        let parallel = kind
            .build(dictionary.clone(), MatchConfig::default())
            .unwrap()
            .analyze_groups(&first, &second);
        let sequential = kind
            .build(
                dictionary.clone(),
                MatchConfig {
                    parallel: false,
                    ..Default::default()
                },
            )
            .unwrap()
            .analyze_groups(&first, &second);
        assert_eq!(parallel, sequential);
    }
}
