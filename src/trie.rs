// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An ordered `/`-segmented prefix map from expanded keys to title sets.
//!
//! Backed by a plain `BTreeMap<Arc<str>, HashSet<Title>>`. The token alphabet is
//! restricted to lowercase ASCII alphanumerics (enforced at load time), and `/`
//! (0x2F) sorts below every such byte, so byte-lexicographic order over the full
//! joined key already agrees with segment-wise path order — no custom comparator or
//! node tree is needed for correct sorted enumeration.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::contracts;
use crate::types::Title;

/// One instance per engine. Never shared statically — a trie built for one dataset
/// must never leak into another engine's lookups.
#[derive(Debug, Default)]
pub struct MatchTrie {
    entries: BTreeMap<Arc<str>, HashSet<Title>>,
}

impl MatchTrie {
    pub fn new() -> Self {
        MatchTrie::default()
    }

    /// Insert `title` under `key`, unioning into any existing entry.
    pub fn insert(&mut self, key: Arc<str>, title: Title) {
        contracts::check_trie_key_well_formed(&key);
        self.entries.entry(key).or_default().insert(title);
    }

    pub fn get(&self, key: &str) -> Option<&HashSet<Title>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True iff some stored key strictly extends `prefix` as a `/`-delimited path
    /// (i.e. is `prefix` itself followed by `/` and more segments).
    pub fn has_subtrie(&self, prefix: &str) -> bool {
        let probe: Arc<str> = Arc::from(format!("{prefix}/"));
        self.entries
            .range(probe.clone()..)
            .next()
            .map(|(k, _)| k.starts_with(probe.as_ref()))
            .unwrap_or(false)
    }

    /// All stored keys equal to `prefix` or extending it with further `/`-segments,
    /// in sorted order.
    pub fn iter_keys_under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let start: Arc<str> = Arc::from(prefix);
        let with_slash = format!("{prefix}/");
        self.entries
            .range(start..)
            .take_while(move |(k, _)| k.as_ref() == prefix || k.starts_with(&with_slash))
            .map(|(k, _)| k.as_ref())
    }

    /// Every stored key that is itself a `/`-delimited prefix of `key`, together with
    /// its title set.
    ///
    /// Because every stored key is built by joining `/`-separated tokens, any stored
    /// key that is a valid prefix of `key` must be one of `key`'s own progressive
    /// leading-segment joins. Checking those directly is `O(depth)` point lookups
    /// rather than an `O(n)` scan over the whole trie.
    pub fn iter_prefixes_of<'a>(&'a self, key: &'a str) -> Vec<(&'a str, &'a HashSet<Title>)> {
        let mut out = Vec::new();
        for (candidate, boundary) in leading_joins(key) {
            if let Some(titles) = self.entries.get(candidate) {
                out.push((candidate, titles));
            }
            let _ = boundary;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Yields, in increasing length order, the prefixes of `key` that fall exactly on a
/// `/` boundary (including `key` itself).
fn leading_joins(key: &str) -> impl Iterator<Item = (&str, usize)> {
    let mut boundaries: Vec<usize> = key
        .char_indices()
        .filter(|(_, c)| *c == '/')
        .map(|(i, _)| i)
        .collect();
    boundaries.push(key.len());
    boundaries.into_iter().map(move |end| (&key[..end], end))
}

/// Number of `/`-separated segments in `key` (depth), i.e. `key.matches('/').count() + 1`
/// for a non-empty key.
pub fn depth(key: &str) -> usize {
    key.matches('/').count()
}
