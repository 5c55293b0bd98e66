// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference loader for grokked-CPE title data.
//!
//! Consumes the JSON shape produced by an external CPE grokker: a mapping from title to
//! a list of fields, each field a list of alternatives where JSON `null` is the skip
//! sentinel. Validates the shape eagerly so a malformed dataset fails before any trie
//! work begins, rather than partway through.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::ConstructionError;
use crate::types::{Alt, Field, FieldList, Title};

/// Parses a grokked-CPE JSON document already read into memory.
pub fn parse_titles(json: &str) -> Result<Vec<(Title, FieldList)>, ConstructionError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|_| ConstructionError::RootNotObject)?;
    let root = value.as_object().ok_or(ConstructionError::RootNotObject)?;

    let mut titles = Vec::with_capacity(root.len());
    for (title, field_list_value) in root {
        let rows = field_list_value.as_array().ok_or_else(|| {
            ConstructionError::FieldListNotArray {
                title: title.clone(),
            }
        })?;

        let mut fields = Vec::with_capacity(rows.len());
        for (field_index, row_value) in rows.iter().enumerate() {
            let row_array = row_value.as_array().ok_or_else(|| ConstructionError::InvalidField {
                title: title.clone(),
                field_index,
            })?;

            let mut row = Vec::with_capacity(row_array.len());
            for alt_value in row_array {
                match alt_value {
                    serde_json::Value::Null => row.push(None),
                    serde_json::Value::String(s) => row.push(Some(s.clone())),
                    _ => {
                        return Err(ConstructionError::InvalidField {
                            title: title.clone(),
                            field_index,
                        })
                    }
                }
            }

            if row.is_empty() {
                return Err(ConstructionError::InvalidField {
                    title: title.clone(),
                    field_index,
                });
            }
            let skip_count = row.iter().filter(|a| a.is_none()).count();
            if skip_count > 1 {
                return Err(ConstructionError::MultipleSkipsInField {
                    title: title.clone(),
                    field_index,
                });
            }

            let mut alts = Vec::with_capacity(row.len());
            for alt in row {
                match alt {
                    None => alts.push(Alt::Skip),
                    Some(token) => {
                        if token.contains('/') {
                            return Err(ConstructionError::TokenContainsSeparator {
                                title: title.clone(),
                                field_index,
                                token,
                            });
                        }
                        alts.push(Alt::token(token));
                    }
                }
            }
            // Shape already validated above; `Field::new` cannot return `None` here.
            let field = Field::new(alts).ok_or_else(|| ConstructionError::InvalidField {
                title: title.clone(),
                field_index,
            })?;
            fields.push(field);
        }
        titles.push((Title::from(title.as_str()), FieldList(fields)));
    }

    Ok(titles)
}

/// Reads and parses a grokked-CPE JSON file from disk.
pub fn load_titles(path: impl AsRef<Path>) -> Result<Vec<(Title, FieldList)>, ConstructionError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ConstructionError::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_titles(&content)
}

/// A synonyms file: canonical token -> additional alternatives for any field whose
/// first alternative equals that token.
#[derive(Debug, Clone, Default)]
pub struct Synonyms(HashMap<String, Vec<Option<String>>>);

impl Synonyms {
    pub fn parse(json: &str) -> Result<Self, ConstructionError> {
        let raw: HashMap<String, Vec<Option<String>>> =
            serde_json::from_str(json).map_err(|_| ConstructionError::InvalidSynonymsFile)?;
        Ok(Synonyms(raw))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConstructionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConstructionError::Io(format!("failed to read {}: {e}", path.display())))?;
        Synonyms::parse(&content)
    }

    /// Merges this synonyms table into `titles`, one level deep: for each field whose
    /// first alternative is a canonical key, append the corresponding synonym
    /// alternatives (already lowercased by the caller's data, `null` mapping to skip).
    ///
    /// Not transitive: a synonym that is itself a canonical key in the table does not
    /// trigger a second expansion pass.
    pub fn merge_into(&self, titles: &mut [(Title, FieldList)]) {
        for (_, field_list) in titles.iter_mut() {
            for field in field_list.0.iter_mut() {
                let canonical = field.alternatives().first().and_then(Alt::as_token);
                let Some(canonical) = canonical else { continue };
                let Some(synonyms) = self.0.get(canonical) else { continue };

                let mut alts = field.alternatives().to_vec();
                for synonym in synonyms {
                    match synonym {
                        Some(token) => alts.push(Alt::token(token.as_str())),
                        None => {
                            if !alts.iter().any(Alt::is_skip) {
                                alts.push(Alt::Skip);
                            }
                        }
                    }
                }
                if let Some(rebuilt) = Field::new(alts) {
                    *field = rebuilt;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_grokked_document() {
        let json = r#"{
            "Apple iPhone OS 16.1": [["apple", null], ["iphone", "ios"], ["os", null], ["16"], ["1"]]
        }"#;
        let titles = parse_titles(json).unwrap();
        assert_eq!(titles.len(), 1);
        let (title, fields) = &titles[0];
        assert_eq!(title.as_ref(), "Apple iPhone OS 16.1");
        assert_eq!(fields.fields().len(), 5);
        assert_eq!(fields.fields()[0].alternatives().len(), 2);
    }

    #[test]
    fn rejects_non_object_root() {
        let err = parse_titles("[]").unwrap_err();
        assert_eq!(err, ConstructionError::RootNotObject);
    }

    #[test]
    fn rejects_token_containing_separator() {
        let json = r#"{"Bad Title": [["a/b"]]}"#;
        let err = parse_titles(json).unwrap_err();
        match err {
            ConstructionError::TokenContainsSeparator { token, .. } => assert_eq!(token, "a/b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_field_with_two_skips() {
        let json = r#"{"Bad Title": [[null, null]]}"#;
        let err = parse_titles(json).unwrap_err();
        match err {
            ConstructionError::MultipleSkipsInField { .. } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_field_list_that_is_not_an_array() {
        let json = r#"{"Bad Title": "not-a-field-list"}"#;
        let err = parse_titles(json).unwrap_err();
        match err {
            ConstructionError::FieldListNotArray { title } => assert_eq!(title, "Bad Title"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn synonyms_merge_one_level_without_transitivity() {
        let json = r#"{
            "Ubuntu Linux 14.04.1": [["canonical", null], ["ubuntu"], ["linux", null], ["14"], ["04"], ["1"]]
        }"#;
        let mut titles = parse_titles(json).unwrap();
        let synonyms = Synonyms::parse(r#"{"ubuntu": ["kubuntu", "xubuntu"]}"#).unwrap();
        synonyms.merge_into(&mut titles);

        let ubuntu_field = &titles[0].1.fields()[1];
        let tokens: Vec<&str> = ubuntu_field
            .alternatives()
            .iter()
            .filter_map(Alt::as_token)
            .collect();
        assert_eq!(tokens, vec!["ubuntu", "kubuntu", "xubuntu"]);
    }
}
