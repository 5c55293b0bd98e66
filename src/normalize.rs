// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term normalization: MAC rewrite, case folding, dedupe, and prefix-term-set filtering.

use std::collections::HashSet;
use std::sync::Arc;

use crate::mac_vendor::MacVendorLookup;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a term to lowercase the same way the rest of the corpus folds title text.
///
/// With the `unicode-normalization` feature, diacritics are stripped (NFD decompose,
/// drop combining marks) before lowercasing, so `"café"` and `"cafe"` compare equal.
/// Without it, this is a plain lowercase.
#[cfg(feature = "unicode-normalization")]
fn fold_case(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// True if `term` looks like a MAC address: six colon-separated hex octets, or twelve
/// bare hex digits.
pub fn looks_like_mac(term: &str) -> bool {
    if term.len() == 17 {
        let bytes = term.as_bytes();
        return bytes.iter().enumerate().all(|(i, &b)| {
            if i % 3 == 2 {
                b == b':'
            } else {
                b.is_ascii_hexdigit()
            }
        });
    }
    term.len() == 12 && term.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Split a vendor string into terms the way the reference lookup's callers expect:
/// on any of `_`, `,`, `:`, `.`, `)`, `(`, `\`.
fn split_vendor_string(vendor: &str) -> Vec<String> {
    vendor
        .split(|c| matches!(c, '_' | ',' | ':' | '.' | ')' | '(' | '\\'))
        .map(str::to_owned)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize a raw term bag: rewrite MAC-shaped terms via `mac_lookup`, fold case,
/// drop duplicates (keeping first occurrence), and keep only terms present in
/// `prefix_terms`.
pub fn normalize(
    terms: &[String],
    prefix_terms: &HashSet<Arc<str>>,
    mac_lookup: Option<&dyn MacVendorLookup>,
) -> Vec<Arc<str>> {
    let mut expanded: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        if looks_like_mac(term) {
            if let Some(lookup) = mac_lookup {
                match lookup.lookup(term) {
                    Ok(vendor) => {
                        expanded.extend(split_vendor_string(&vendor));
                        continue;
                    }
                    Err(_) => {
                        // fall back to the raw term below
                    }
                }
            }
        }
        expanded.push(term.clone());
    }

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(expanded.len());
    for term in expanded {
        let folded: Arc<str> = fold_case(&term).into();
        if !prefix_terms.contains(&folded) {
            continue;
        }
        if seen.insert(folded.clone()) {
            out.push(folded);
        }
    }
    out
}
