// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Product title resolution from loose, unordered term bags via a CPE-derived
//! match-string trie.
//!
//! Given a few terms like `{"ubuntu", "linux", "19", "04"}` this crate resolves the
//! closest product title, e.g. `"Canonical Ubuntu Linux 19.04"`. The input is typically
//! extracted from `uname` banners, DHCP fingerprints, HTTP user agents, or MAC-vendor
//! lookups, and arrives unordered and possibly incomplete.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐   ┌─────────────┐   ┌────────────┐
//! │ loader.rs │──▶│key_expand.rs│──▶│   trie.rs  │
//! │ (grokked  │   │ (Cartesian  │   │ (ordered   │
//! │  JSON ->  │   │  product of │   │  `/`-keyed │
//! │ FieldList)│   │  alternates)│   │  prefix    │
//! └───────────┘   └─────────────┘   │    map)    │
//!                                    └──────┬─────┘
//!                                           │
//!                        ┌──────────────────▼───────────────────┐
//!                        │               engine.rs                │
//!                        │ (normalize -> permute -> score buckets │
//!                        │  -> best-only similarity refinement)   │
//!                        └──────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use match_string_trie::{loader, EngineOptions, MatchStringTrie};
//!
//! let json = r#"{
//!     "Canonical Ubuntu Linux 14.04.1": [
//!         ["canonical", null], ["ubuntu"], ["linux", null], ["14"], ["04"], ["1"]
//!     ]
//! }"#;
//! let titles = loader::parse_titles(json).unwrap();
//! let engine = MatchStringTrie::new(titles, EngineOptions::default(), None);
//!
//! let terms = vec!["ubuntu".to_string(), "linux".to_string(), "14".to_string(), "04".to_string(), "1".to_string()];
//! let result = engine.search(&terms, true, false);
//! assert!(result.contains("Canonical Ubuntu Linux 14.04.1"));
//! ```

pub mod cli;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod key_expand;
pub mod loader;
pub mod mac_vendor;
pub mod normalize;
pub mod scoring;
pub mod similarity;
pub mod trie;
pub mod types;

pub use engine::MatchStringTrie;
pub use error::{ConstructionError, MacLookupError};
pub use mac_vendor::{MacVendorLookup, NullVendorLookup, StaticVendorLookup};
pub use trie::MatchTrie;
pub use types::{
    Alt, EngineOptions, Field, FieldList, RawFieldList, ScoringStrategy, Title,
    DEFAULT_PERMUTATION_CAP,
};
