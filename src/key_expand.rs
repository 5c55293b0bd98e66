// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cartesian-product key expansion: from a title's [`FieldList`] to the full/long/short
//! keys stored in the [`crate::trie::MatchTrie`].
//!
//! Mirrors the map/reduce split the rest of this project uses for parallel index
//! construction: expand each title independently (map), then merge the resulting
//! `(key, title)` pairs into one trie (reduce).

use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::trie::MatchTrie;
use crate::types::{Alt, FieldList, Title};

/// One title's contribution to the trie: its expanded keys and every non-skip
/// alternative it introduces to the prefix term set.
struct Expansion {
    keys: Vec<Arc<str>>,
    terms: Vec<Arc<str>>,
}

fn expand_title(title: &Title, fields: &FieldList) -> Expansion {
    let mut keys = Vec::new();
    let mut terms = Vec::new();

    for field in fields.fields() {
        for alt in field.alternatives() {
            if let Alt::Token(t) = alt {
                terms.push(t.clone());
            }
        }
    }

    for combination in cartesian_product(fields.fields()) {
        let tokens: Vec<&str> = combination
            .iter()
            .filter_map(|alt| alt.as_token())
            .collect();
        if tokens.is_empty() {
            continue;
        }

        let full_key = tokens.join("/");
        keys.push(Arc::from(full_key.as_str()));

        if tokens.len() >= 3 {
            keys.push(Arc::from(tokens[..3].join("/").as_str()));
        }
        if tokens.len() >= 2 {
            keys.push(Arc::from(tokens[..2].join("/").as_str()));
        }
    }

    let _ = title;
    Expansion { keys, terms }
}

/// All combinations of one alternative per field, in field order.
fn cartesian_product(fields: &[crate::types::Field]) -> Vec<Vec<Alt>> {
    let mut combos: Vec<Vec<Alt>> = vec![Vec::new()];
    for field in fields {
        let mut next = Vec::with_capacity(combos.len() * field.alternatives().len());
        for combo in &combos {
            for alt in field.alternatives() {
                let mut extended = combo.clone();
                extended.push(alt.clone());
                next.push(extended);
            }
        }
        combos = next;
    }
    combos
}

/// The prefix term set alone, without expanding or inserting any trie keys. Cheap
/// enough to run for an `inspect`-style report that shouldn't pay for a full build.
pub fn prefix_terms_only(titles: &[(Title, FieldList)]) -> HashSet<Arc<str>> {
    let mut terms = HashSet::new();
    for (_, fields) in titles {
        for field in fields.fields() {
            for alt in field.alternatives() {
                if let Alt::Token(t) = alt {
                    terms.insert(t.clone());
                }
            }
        }
    }
    terms
}

/// Builds the trie and prefix term set sequentially.
pub fn build_sequential(titles: &[(Title, FieldList)]) -> (MatchTrie, HashSet<Arc<str>>) {
    let mut trie = MatchTrie::new();
    let mut prefix_terms = HashSet::new();

    for (title, fields) in titles {
        let expansion = expand_title(title, fields);
        for key in expansion.keys {
            trie.insert(key, title.clone());
        }
        prefix_terms.extend(expansion.terms);
    }

    (trie, prefix_terms)
}

/// Builds the trie and prefix term set using a rayon work-stealing pool: each title is
/// expanded independently (map phase), then the per-title `(key, title)` pairs are
/// merged into the shared trie and term set (reduce phase). Produces the same result
/// as [`build_sequential`].
#[cfg(feature = "parallel")]
pub fn build_parallel(titles: &[(Title, FieldList)]) -> (MatchTrie, HashSet<Arc<str>>) {
    let per_title: Vec<Expansion> = titles
        .par_iter()
        .map(|(title, fields)| expand_title(title, fields))
        .collect();

    let mut trie = MatchTrie::new();
    let mut prefix_terms = HashSet::new();
    for ((title, _), expansion) in titles.iter().zip(per_title.into_iter()) {
        for key in expansion.keys {
            trie.insert(key, title.clone());
        }
        prefix_terms.extend(expansion.terms);
    }

    (trie, prefix_terms)
}
