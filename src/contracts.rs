// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the trie and scoring invariants.
//!
//! Debug-mode assertions only (`debug_assert!`), zero-cost in release builds. These
//! exist to catch a broken invariant close to its source rather than as a garbled
//! result three calls later.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::scoring::EXACT_BUCKET;
use crate::types::{Field, Title};

/// A field is non-empty and carries at most one skip alternative.
///
/// `Field::new` already enforces this at construction, so a well-formed `Field` can
/// never violate it; this exists for call sites (e.g. after synonym merging rebuilds a
/// field) that want an explicit checkpoint rather than relying on the constructor
/// silently having done its job.
#[inline]
pub fn check_field_well_formed(field: &Field) {
    debug_assert!(
        !field.alternatives().is_empty(),
        "Contract violation: field has no alternatives"
    );
    let skip_count = field.alternatives().iter().filter(|a| a.is_skip()).count();
    debug_assert!(
        skip_count <= 1,
        "Contract violation: field has {skip_count} skip alternatives, expected at most 1"
    );
}

/// A trie key is non-empty, has no empty `/`-segments, and no segment itself contains
/// `/` (the path separator can never appear inside a token — CPE placeholder tokens
/// like `-` are otherwise allowed, since the similarity tie-break pins `-` as junk
/// specifically because it shows up in real data).
#[inline]
pub fn check_trie_key_well_formed(key: &str) {
    debug_assert!(!key.is_empty(), "Contract violation: trie key is empty");
    for segment in key.split('/') {
        debug_assert!(
            !segment.is_empty(),
            "Contract violation: trie key {key:?} has an empty segment"
        );
    }
}

/// A bucket score never exceeds the exact-match bucket.
#[inline]
pub fn check_bucket_score_bounds(score: i64) {
    debug_assert!(
        score <= EXACT_BUCKET,
        "Contract violation: bucket score {score} exceeds EXACT_BUCKET ({EXACT_BUCKET})"
    );
}

/// If the exact-match bucket is occupied, it must be the bucket selection picks (the
/// maximum key in the bucket map).
#[inline]
pub fn check_exact_bucket_dominates(buckets: &BTreeMap<i64, HashSet<Title>>) {
    if let Some(exact) = buckets.get(&EXACT_BUCKET) {
        if !exact.is_empty() {
            let max_key = buckets.keys().next_back().copied();
            debug_assert_eq!(
                max_key,
                Some(EXACT_BUCKET),
                "Contract violation: exact-match bucket is occupied but is not the maximum bucket"
            );
        }
    }
}
