// The occupation catalog: the fixed reference basis both documents in a
// pair are compared against.
//
// Two layers: `Catalog` is the raw key -> description mapping; building an
// `EmbeddedCatalog` embeds every entry exactly once and freezes the sorted
// key order that every distance profile uses for the rest of the run. The
// ordering lives in one owned list threaded through all profile work, so
// two profiles from the same `EmbeddedCatalog` can never disagree on
// layout.

pub mod loader;

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::info;

use crate::embed::embed_document;
use crate::vectors::VectorLookup;

/// Raw catalog: unique string key -> descriptive text.
///
/// Keys are unique by construction; inserting a duplicate key keeps the
/// last value, matching how the reference dataset loader behaved.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Build a catalog from (key, text) pairs. Later duplicates win.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map = BTreeMap::new();
        for (key, text) in entries {
            map.insert(key, text);
        }
        Self { entries: map }
    }

    /// Prepend each entry's key to its text, returning a new catalog.
    ///
    /// Occupation titles carry signal the descriptions often lack
    /// ("registered nurse" vs. a paragraph about patient care), so the
    /// extraction driver folds titles into the embedded text. Kept as an
    /// explicit data-prep step — the embedding layers below stay agnostic.
    pub fn with_keys_in_text(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), format!("{k} {v}")));
        Self::from_entries(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }
}

/// The catalog after embedding: one vector per entry plus the frozen,
/// lexicographically sorted key order. Immutable for the lifetime of a run.
pub struct EmbeddedCatalog {
    keys: Vec<String>,
    vectors: Vec<Vec<f64>>,
    dim: usize,
}

impl EmbeddedCatalog {
    /// Embed every catalog entry once and freeze the sorted key order.
    ///
    /// Fails fast if the catalog is empty or if the lookup's dimension
    /// differs from `expected_dim` — a configuration error that must
    /// surface before any pairwise work starts, not per-pair.
    pub fn build(
        catalog: &Catalog,
        lookup: &dyn VectorLookup,
        expected_dim: usize,
    ) -> Result<Self> {
        if lookup.dim() != expected_dim {
            anyhow::bail!(
                "Word vector model has dimension {} but KINDRED_DIM expects {}",
                lookup.dim(),
                expected_dim
            );
        }
        if catalog.is_empty() {
            anyhow::bail!("Catalog is empty — no entries to compare against");
        }

        let mut keys = Vec::with_capacity(catalog.len());
        let mut vectors = Vec::with_capacity(catalog.len());
        for (key, text) in catalog.iter() {
            keys.push(key.clone());
            vectors.push(embed_document(text, lookup));
        }

        info!(
            entries = keys.len(),
            dim = expected_dim,
            "Embedded reference catalog"
        );

        Ok(Self {
            keys,
            vectors,
            dim: expected_dim,
        })
    }

    /// Number of entries — also the length of every distance profile.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry keys in the frozen sorted order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Entry vectors, aligned index-for-index with `keys()`.
    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::WordVectors;

    fn toy_lookup() -> WordVectors {
        WordVectors::from_pairs(
            2,
            [
                ("cat".to_string(), vec![1.0, 0.0]),
                ("dog".to_string(), vec![0.0, 1.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_keys_sorted_regardless_of_insertion_order() {
        let catalog = Catalog::from_entries([
            ("zebra keeper".to_string(), "dog".to_string()),
            ("animal trainer".to_string(), "cat".to_string()),
            ("mail carrier".to_string(), "dog cat".to_string()),
        ]);
        let embedded = EmbeddedCatalog::build(&catalog, &toy_lookup(), 2).unwrap();
        assert_eq!(
            embedded.keys(),
            &["animal trainer", "mail carrier", "zebra keeper"]
        );
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let catalog = Catalog::from_entries([
            ("trainer".to_string(), "cat".to_string()),
            ("trainer".to_string(), "dog".to_string()),
        ]);
        assert_eq!(catalog.len(), 1);
        let embedded = EmbeddedCatalog::build(&catalog, &toy_lookup(), 2).unwrap();
        assert_eq!(embedded.vectors()[0], vec![0.0, 1.0]);
    }

    #[test]
    fn test_dimension_mismatch_is_fatal_at_build() {
        let catalog = Catalog::from_entries([("a".to_string(), "cat".to_string())]);
        let result = EmbeddedCatalog::build(&catalog, &toy_lookup(), 300);
        assert!(result.is_err(), "dim 2 model vs expected 300 must fail");
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let catalog = Catalog::default();
        assert!(EmbeddedCatalog::build(&catalog, &toy_lookup(), 2).is_err());
    }

    #[test]
    fn test_with_keys_in_text() {
        let catalog = Catalog::from_entries([("cat".to_string(), "dog".to_string())]);
        let merged = catalog.with_keys_in_text();
        let (_, text) = merged.iter().next().unwrap();
        assert_eq!(text, "cat dog");
    }

    #[test]
    fn test_unknown_entry_text_embeds_to_zero_vector() {
        let catalog = Catalog::from_entries([("mystery".to_string(), "qqq zzz".to_string())]);
        let embedded = EmbeddedCatalog::build(&catalog, &toy_lookup(), 2).unwrap();
        assert_eq!(embedded.vectors()[0], vec![0.0, 0.0]);
    }
}
