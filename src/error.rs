// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed failures for construction. Queries never fail — unknown terms are filtered,
//! not rejected — so [`std::result::Result`] only appears here, at the loader and
//! MAC-vendor-shim boundaries.

use std::fmt;

/// Why a grokked-CPE dataset could not be turned into a [`crate::types::FieldList`] map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The JSON root was not an object mapping titles to field lists.
    RootNotObject,
    /// A title's value was not an array of fields.
    FieldListNotArray { title: String },
    /// A field was empty, or was not an array of string/null alternatives.
    InvalidField { title: String, field_index: usize },
    /// An alternative contained `/`, the trie's reserved path separator.
    TokenContainsSeparator {
        title: String,
        field_index: usize,
        token: String,
    },
    /// A field carried more than one `null` (skip) alternative.
    MultipleSkipsInField { title: String, field_index: usize },
    /// The synonyms file was not an object mapping canonical tokens to arrays of strings.
    InvalidSynonymsFile,
    /// Reading or parsing the underlying file failed.
    Io(String),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::RootNotObject => {
                write!(f, "grokked data root must be a JSON object of title -> field list")
            }
            ConstructionError::FieldListNotArray { title } => {
                write!(f, "field list for title {title:?} is not a JSON array")
            }
            ConstructionError::InvalidField { title, field_index } => write!(
                f,
                "field {field_index} of title {title:?} is empty or malformed"
            ),
            ConstructionError::TokenContainsSeparator {
                title,
                field_index,
                token,
            } => write!(
                f,
                "token {token:?} in field {field_index} of title {title:?} contains the reserved '/' separator"
            ),
            ConstructionError::MultipleSkipsInField { title, field_index } => write!(
                f,
                "field {field_index} of title {title:?} has more than one skip alternative"
            ),
            ConstructionError::InvalidSynonymsFile => {
                write!(f, "synonyms file root must be a JSON object of token -> array of strings")
            }
            ConstructionError::Io(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Why a MAC-vendor lookup could not rewrite a MAC-shaped term.
///
/// On any of these, the engine keeps the original term unchanged rather than failing
/// the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacLookupError {
    /// No entry for this address's OUI prefix.
    NotFound,
    /// The backing lookup (e.g. a network-backed implementation) failed.
    LookupFailed(String),
}

impl fmt::Display for MacLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacLookupError::NotFound => write!(f, "no vendor entry for this MAC address"),
            MacLookupError::LookupFailed(reason) => write!(f, "vendor lookup failed: {reason}"),
        }
    }
}

impl std::error::Error for MacLookupError {}
