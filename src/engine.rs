// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: owns the trie and prefix term set, and implements `search`.
//!
//! Construction is lazy by default — the trie is built on first [`MatchStringTrie::search`]
//! call, guarded by a [`OnceLock`] so later calls reuse the same built state without
//! locking. [`EngineOptions::eager_load`] builds immediately instead.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, OnceLock};

use crate::contracts;
use crate::key_expand;
use crate::mac_vendor::MacVendorLookup;
use crate::normalize;
use crate::scoring;
use crate::similarity;
use crate::trie::{self, MatchTrie};
use crate::types::{EngineOptions, FieldList, Title};

struct Built {
    trie: MatchTrie,
    prefix_terms: HashSet<Arc<str>>,
}

/// Resolves loose, unordered term bags to product titles via a match-string trie.
pub struct MatchStringTrie {
    titles: Vec<(Title, FieldList)>,
    options: EngineOptions,
    mac_lookup: Option<Box<dyn MacVendorLookup>>,
    built: OnceLock<Built>,
}

impl MatchStringTrie {
    /// Creates an engine over `titles`. Building the trie is deferred until the first
    /// `search` unless `options.eager_load` is set.
    pub fn new(
        titles: Vec<(Title, FieldList)>,
        options: EngineOptions,
        mac_lookup: Option<Box<dyn MacVendorLookup>>,
    ) -> Self {
        let engine = MatchStringTrie {
            titles,
            options,
            mac_lookup,
            built: OnceLock::new(),
        };
        if engine.options.eager_load {
            engine.ensure_built();
        }
        engine
    }

    fn ensure_built(&self) -> &Built {
        self.built.get_or_init(|| {
            #[cfg(feature = "parallel")]
            let (trie, prefix_terms) = key_expand::build_parallel(&self.titles);
            #[cfg(not(feature = "parallel"))]
            let (trie, prefix_terms) = key_expand::build_sequential(&self.titles);
            Built { trie, prefix_terms }
        })
    }

    /// True once the trie has been built, either eagerly at construction or lazily by
    /// a prior `search` call.
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// Number of distinct trie keys (full + long + short, deduplicated). Builds the
    /// trie if it hasn't been already.
    pub fn key_count(&self) -> usize {
        self.ensure_built().trie.len()
    }

    /// Size of the prefix term set. Builds the trie if it hasn't been already.
    pub fn prefix_term_count(&self) -> usize {
        self.ensure_built().prefix_terms.len()
    }

    /// Resolves `terms` to the set of matching titles.
    ///
    /// `best_only` refines a tied or multi-candidate result down to a single
    /// similarity-best title. `strict_equal_key_only` limits the search to exact trie
    /// keys, skipping subtree and prefix approximation entirely.
    pub fn search(
        &self,
        terms: &[String],
        best_only: bool,
        strict_equal_key_only: bool,
    ) -> HashSet<Title> {
        if terms.is_empty() {
            return HashSet::new();
        }

        let built = self.ensure_built();
        let mac_lookup = self.mac_lookup.as_deref();
        let filtered = normalize::normalize(terms, &built.prefix_terms, mac_lookup);
        if filtered.is_empty() {
            return HashSet::new();
        }

        let mut buckets: BTreeMap<i64, HashSet<Title>> = BTreeMap::new();
        for permutation in permutations(&filtered, self.options.permutation_cap) {
            let key = join_key(&permutation);

            if let Some(titles) = built.trie.get(&key) {
                if strict_equal_key_only {
                    return titles.clone();
                }
                buckets.entry(scoring::EXACT_BUCKET).or_default().extend(titles.iter().cloned());
                continue;
            }
            if strict_equal_key_only {
                continue;
            }

            let query_depth = trie::depth(&key);
            if built.trie.has_subtrie(&key) {
                for candidate in built.trie.iter_keys_under(&key) {
                    let candidate_depth = trie::depth(candidate);
                    let bucket = scoring::score(
                        self.options.scoring_strategy,
                        candidate_depth,
                        query_depth,
                    );
                    contracts::check_bucket_score_bounds(bucket);
                    if let Some(titles) = built.trie.get(candidate) {
                        buckets.entry(bucket).or_default().extend(titles.iter().cloned());
                    }
                }
            } else {
                for (candidate, titles) in built.trie.iter_prefixes_of(&key) {
                    let candidate_depth = trie::depth(candidate);
                    let bucket = scoring::score(
                        self.options.scoring_strategy,
                        candidate_depth,
                        query_depth,
                    );
                    contracts::check_bucket_score_bounds(bucket);
                    buckets.entry(bucket).or_default().extend(titles.iter().cloned());
                }
            }
        }

        contracts::check_exact_bucket_dominates(&buckets);
        let result = buckets.into_iter().next_back().map(|(_, titles)| titles).unwrap_or_default();
        if result.is_empty() || !best_only {
            return result;
        }

        refine_by_similarity(result, &filtered)
    }
}

fn join_key(terms: &[Arc<str>]) -> String {
    terms.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join("/")
}

fn refine_by_similarity(candidates: HashSet<Title>, filtered: &[Arc<str>]) -> HashSet<Title> {
    let joined_query: String = filtered.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join(" ");
    let mut scored: Vec<(Title, f64)> = candidates
        .into_iter()
        .map(|title| {
            let r = similarity::ratio(&title, &joined_query);
            (title, r)
        })
        .collect();

    let best_ratio = scored
        .iter()
        .map(|(_, r)| *r)
        .fold(f64::MIN, f64::max);

    let mut survivors: Vec<Title> = scored
        .drain(..)
        .filter(|(_, r)| *r == best_ratio)
        .map(|(title, _)| title)
        .collect();

    survivors.sort();
    survivors.sort_by_key(|t| t.len());

    let mut out = HashSet::with_capacity(1);
    if let Some(first) = survivors.into_iter().next() {
        out.insert(first);
    }
    out
}

/// Orderings of `terms` to try. Below `cap` terms, every permutation is generated;
/// beyond it, three representative orderings stand in for the full factorial sweep.
fn permutations(terms: &[Arc<str>], cap: usize) -> Vec<Vec<Arc<str>>> {
    if terms.len() > cap {
        let mut reversed = terms.to_vec();
        reversed.reverse();
        let mut sorted = terms.to_vec();
        sorted.sort();

        let mut orderings = vec![terms.to_vec()];
        if reversed != orderings[0] {
            orderings.push(reversed);
        }
        if sorted != orderings[0] && orderings.get(1) != Some(&sorted) {
            orderings.push(sorted);
        }
        return orderings;
    }

    let mut out = Vec::new();
    let mut working = terms.to_vec();
    permute(&mut working, 0, &mut out);
    out
}

fn permute(items: &mut Vec<Arc<str>>, start: usize, out: &mut Vec<Vec<Arc<str>>>) {
    if start == items.len() {
        out.push(items.clone());
        return;
    }
    for i in start..items.len() {
        items.swap(start, i);
        permute(items, start + 1, out);
        items.swap(start, i);
    }
}
