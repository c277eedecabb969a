//! Named pattern descriptors and catalogs.

use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::{PatternMatrix, decode, decode_strict};
use crate::error::PatternResult;

/// An encoded pattern with its declared size.
///
/// Catalog files written for the web front-end use `column`/`row` keys and
/// quote the counts; both spellings deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Declared column count.
    #[serde(alias = "column", deserialize_with = "count")]
    pub columns: usize,
    /// Declared row count.
    #[serde(alias = "row", deserialize_with = "count")]
    pub rows: usize,
    /// Run-length token stream.
    pub code: String,
}

impl Pattern {
    /// Creates a pattern descriptor.
    pub fn new(
        name: impl Into<String>,
        columns: usize,
        rows: usize,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
            code: code.into(),
        }
    }

    /// Decodes the pattern, clipping malformed input.
    pub fn decode(&self) -> PatternMatrix {
        decode(&self.code, self.columns, self.rows)
    }

    /// Decodes the pattern, rejecting malformed input.
    pub fn decode_strict(&self) -> PatternResult<PatternMatrix> {
        decode_strict(&self.code, self.columns, self.rows)
    }
}

fn count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(usize),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// An ordered collection of patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of patterns.
    pub fn from_json(json: &str) -> PatternResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Catalog of the built-in [`presets`](crate::presets).
    pub fn presets() -> Self {
        crate::presets::ALL.iter().map(|p| p.to_pattern()).collect()
    }

    /// Adds a pattern, replacing any pattern with the same name.
    pub fn insert(&mut self, pattern: Pattern) {
        match self.patterns.iter_mut().find(|p| p.name == pattern.name) {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
    }

    /// Looks up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Iterates patterns in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Iterates patterns shorter than a grid of `rows` rows.
    pub fn fitting(&self, rows: usize) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(move |p| p.rows < rows)
    }

    /// Returns the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromIterator<Pattern> for PatternCatalog {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for pattern in iter {
            catalog.insert(pattern);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternError;

    #[test]
    fn test_from_json_numeric_counts() {
        let json = r#"[{"name": "Blinker", "columns": 3, "rows": 1, "code": "3o!"}]"#;
        let catalog = PatternCatalog::from_json(json).unwrap();
        let blinker = catalog.get("Blinker").unwrap();
        assert_eq!(blinker.columns, 3);
        assert_eq!(blinker.rows, 1);
        assert_eq!(blinker.decode().population(), 3);
    }

    #[test]
    fn test_from_json_string_counts_and_aliases() {
        let json = r#"[{"name": "Glider", "column": "3", "row": "3", "code": "bo$2bo$3o!"}]"#;
        let catalog = PatternCatalog::from_json(json).unwrap();
        let glider = catalog.get("Glider").unwrap();
        assert_eq!((glider.columns, glider.rows), (3, 3));
    }

    #[test]
    fn test_from_json_rejects_bad_count() {
        let json = r#"[{"name": "Bad", "column": "three", "row": "3", "code": "o!"}]"#;
        let err = PatternCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, PatternError::Json(_)));
    }

    #[test]
    fn test_oversized_entry_loads_but_decodes_empty() {
        let json = r#"[{"name": "Huge", "column": "4294967296", "row": "4294967296", "code": "o!"}]"#;
        let catalog = PatternCatalog::from_json(json).unwrap();
        let huge = catalog.get("Huge").unwrap();

        assert_eq!(huge.decode().population(), 0);
        assert!(matches!(
            huge.decode_strict(),
            Err(PatternError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_fitting_filters_tall_patterns() {
        let catalog: PatternCatalog = [
            Pattern::new("short", 3, 1, "3o!"),
            Pattern::new("tall", 1, 10, "o!"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = catalog.fitting(10).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["short"]);
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut catalog = PatternCatalog::new();
        catalog.insert(Pattern::new("p", 1, 1, "o!"));
        catalog.insert(Pattern::new("p", 2, 1, "2o!"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("p").unwrap().columns, 2);
    }

    #[test]
    fn test_serialize_roundtrip_names() {
        let catalog = PatternCatalog::presets();
        let json = serde_json::to_string(&catalog).unwrap();
        let back = PatternCatalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
