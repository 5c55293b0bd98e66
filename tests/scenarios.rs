//! Literal scenarios from the match-string-trie design document, run against the
//! `operating_systems` fixture (see `tests/common/mod.rs`).

mod common;

use common::{build_os_engine, terms};
use match_string_trie::EngineOptions;

#[test]
fn exact_match_on_full_key() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(
        &terms(&["canonical", "ubuntu", "linux", "14", "04", "1"]),
        true,
        false,
    );
    assert!(result.contains("Canonical Ubuntu Linux 14.04.1"));
    assert_eq!(result.len(), 1);
}

#[test]
fn exact_match_is_invariant_under_reordering() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(&terms(&["linux", "ubuntu", "14", "04", "1"]), true, false);
    assert!(result.contains("Canonical Ubuntu Linux 14.04.1"));
    assert_eq!(result.len(), 1);
}

#[test]
fn strict_mode_resolves_a_short_exact_key() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(&terms(&["microsoft", "windows", "vista"]), true, true);
    assert_eq!(result.len(), 1);
    assert!(result.contains("Microsoft Windows Vista"));
}

#[test]
fn single_token_exact_match_on_a_short_key() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(&terms(&["ipados"]), true, false);
    assert_eq!(result.len(), 1);
    assert!(result.contains("Apple iPad OS -"));
}

#[test]
fn all_ties_returned_when_best_only_is_false() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(&terms(&["ios", "11"]), false, false);
    assert_eq!(result.len(), 3);
    assert!(result.contains("Cisco IOS 11.1.13 IA"));
    assert!(result.contains("Cisco IOS 11.1"));
    assert!(result.contains("Apple iPhone OS 11.1.13"));
}

#[test]
fn approximate_prefix_match_resolves_to_the_closer_candidate() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(&terms(&["Windows", "Server", "2016"]), true, false);
    assert_eq!(result.len(), 1);
    assert!(result.contains("Microsoft Windows Server 2012 R2"));
}

#[test]
fn six_term_query_resolves_the_exact_title() {
    let engine = build_os_engine(EngineOptions::default());
    let result = engine.search(
        &terms(&["iphone", "os", "5", "0", "1", "ipodtouch"]),
        true,
        false,
    );
    assert_eq!(result.len(), 1);
    assert!(result.contains("Apple iPhone OS 5.0.1 iPod touch"));
}

#[test]
fn unknown_single_term_yields_empty_set() {
    let engine = build_os_engine(EngineOptions::default());
    assert!(engine.search(&terms(&["xenix"]), true, false).is_empty());
}

#[test]
fn entirely_filtered_terms_yield_empty_set() {
    let engine = build_os_engine(EngineOptions::default());
    assert!(engine.search(&terms(&["foo", "bar"]), true, false).is_empty());
}

#[test]
fn zero_terms_yield_empty_set() {
    let engine = build_os_engine(EngineOptions::default());
    assert!(engine.search(&[], true, false).is_empty());
}
