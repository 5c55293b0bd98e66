// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a matchable title.
//!
//! A title is keyed by a [`FieldList`]: an ordered sequence of [`Field`]s, each a
//! non-empty set of interchangeable [`Alt`]ernatives. Expanding the Cartesian product
//! of a field list and joining the chosen alternatives with `/` (dropping [`Alt::Skip`])
//! produces the keys stored in the [`crate::trie::MatchTrie`].
//!
//! # Invariants
//!
//! - A [`Field`] is never empty.
//! - At most one [`Alt::Skip`] per field (enforced by the loader, not by the type).
//! - A [`Alt::Token`] never contains `/`, the trie's path separator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A product title, interned so it can be shared across many trie entries without
/// cloning the underlying bytes.
pub type Title = Arc<str>;

/// One alternative within a [`Field`]: either a concrete token, or a marker that this
/// field may be omitted entirely when building a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Alt {
    Token(Arc<str>),
    Skip,
}

impl Alt {
    pub fn token(s: impl Into<Arc<str>>) -> Self {
        Alt::Token(s.into())
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            Alt::Token(t) => Some(t),
            Alt::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Alt::Skip)
    }
}

/// A non-empty set of interchangeable alternatives occupying one positional slot in a
/// title's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field(Vec<Alt>);

impl Field {
    /// Builds a field from its alternatives. Returns `None` if `alts` is empty or
    /// contains more than one [`Alt::Skip`].
    pub fn new(alts: Vec<Alt>) -> Option<Self> {
        if alts.is_empty() {
            return None;
        }
        if alts.iter().filter(|a| a.is_skip()).count() > 1 {
            return None;
        }
        Some(Field(alts))
    }

    pub fn alternatives(&self) -> &[Alt] {
        &self.0
    }
}

/// The ordered sequence of fields that defines how a title's keys are expanded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldList(pub Vec<Field>);

impl FieldList {
    pub fn fields(&self) -> &[Field] {
        &self.0
    }
}

/// Which bucket-scoring function the query engine uses for approximate matches.
///
/// Exact matches always occupy the exact bucket regardless of strategy; this only
/// affects how non-exact candidates are ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringStrategy {
    /// `depth(key) + 1` — deeper matches always outrank shallower ones.
    Simple,
    /// `99 - |depth(key) - depth(query)|` — candidates closest in depth to the query
    /// outrank both shallower and longer ones.
    #[default]
    DistanceFromQuery,
}

/// Default cap on the number of normalized query terms permuted exhaustively.
/// Beyond this, [`EngineOptions`] falls back to identity/reverse/sorted orderings.
pub const DEFAULT_PERMUTATION_CAP: usize = 8;

/// Construction-time configuration for a [`crate::engine::MatchStringTrie`].
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Build the trie immediately in the constructor instead of on first `search`.
    pub eager_load: bool,
    /// Bucket-scoring function used for approximate matches.
    pub scoring_strategy: ScoringStrategy,
    /// Maximum query term count permuted exhaustively before falling back to a fixed
    /// set of representative orderings.
    pub permutation_cap: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            eager_load: false,
            scoring_strategy: ScoringStrategy::default(),
            permutation_cap: DEFAULT_PERMUTATION_CAP,
        }
    }
}

/// Serde-facing shape of one title's grokked field list: a list of fields, each a list
/// of alternatives where JSON `null` is the skip sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFieldList(pub Vec<Vec<Option<String>>>);
