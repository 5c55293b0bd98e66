// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pluggable MAC-address-to-vendor lookup.
//!
//! This crate never performs network I/O itself. Callers who want a live OUI database
//! supply their own [`MacVendorLookup`] implementation; two reference implementations
//! are provided for the common cases of "no lookup configured" and "lookup from an
//! already-fetched table".

use std::collections::HashMap;

use crate::error::MacLookupError;

/// Resolves a MAC address (or MAC-shaped term) to a vendor string.
///
/// Implementations are expected to be cheap to call repeatedly; the engine caches
/// nothing beyond what `Self` itself caches, and calls `lookup` once per MAC-shaped
/// query term.
pub trait MacVendorLookup: Send + Sync {
    fn lookup(&self, mac: &str) -> Result<String, MacLookupError>;
}

/// Declines every lookup. Used when no vendor shim is configured; MAC-shaped terms
/// then pass through [`crate::normalize::normalize`] unchanged and typically fail the
/// prefix-term-set filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVendorLookup;

impl MacVendorLookup for NullVendorLookup {
    fn lookup(&self, _mac: &str) -> Result<String, MacLookupError> {
        Err(MacLookupError::NotFound)
    }
}

/// An in-memory OUI-prefix-to-vendor-string table, matched on the first six hex digits
/// of the address (colons stripped, lowercased).
#[derive(Debug, Default, Clone)]
pub struct StaticVendorLookup {
    by_oui: HashMap<String, String>,
}

impl StaticVendorLookup {
    pub fn new() -> Self {
        StaticVendorLookup::default()
    }

    pub fn insert(&mut self, oui_prefix: impl Into<String>, vendor: impl Into<String>) {
        self.by_oui.insert(oui_prefix.into().to_lowercase(), vendor.into());
    }
}

impl MacVendorLookup for StaticVendorLookup {
    fn lookup(&self, mac: &str) -> Result<String, MacLookupError> {
        let stripped: String = mac.chars().filter(|c| *c != ':').collect();
        let oui: String = stripped.chars().take(6).collect::<String>().to_lowercase();
        self.by_oui
            .get(&oui)
            .cloned()
            .ok_or(MacLookupError::NotFound)
    }
}
