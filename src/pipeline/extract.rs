// Batch feature extraction across all text pairs.
//
// Each pair reads only the word vector table and the embedded catalog, both
// frozen before this runs, so pairs are scored on a rayon worker pool with
// no coordination. The parallel iterator's collect preserves input order,
// which is what keeps feature rows aligned with pair ids and the external
// label file.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;

use crate::catalog::EmbeddedCatalog;
use crate::features::matrix::FeatureMatrix;
use crate::features::pairwise::extract_pair_features;
use crate::pairs::TextPair;
use crate::vectors::VectorLookup;

/// Extract the feature matrix for an ordered list of pairs.
///
/// Row i of the result corresponds exactly to `pairs[i]`. The catalog must
/// be fully built before this is called — its construction is the one
/// barrier in the pipeline.
pub fn extract_features(
    pairs: &[TextPair],
    lookup: &dyn VectorLookup,
    catalog: &EmbeddedCatalog,
) -> FeatureMatrix {
    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Pairs [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let rows: Vec<Vec<f64>> = pairs
        .par_iter()
        .map(|pair| {
            let features = extract_pair_features(&pair.text1, &pair.text2, lookup, catalog);
            pb.inc(1);
            features.as_row()
        })
        .collect();
    pb.finish_and_clear();

    info!(
        pairs = rows.len(),
        catalog_entries = catalog.len(),
        "Extracted pairwise features"
    );

    FeatureMatrix::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::vectors::WordVectors;

    fn toy_world() -> (WordVectors, EmbeddedCatalog) {
        let lookup = WordVectors::from_pairs(
            2,
            [
                ("cat".to_string(), vec![1.0, 0.0]),
                ("dog".to_string(), vec![0.0, 1.0]),
            ],
        )
        .unwrap();
        let catalog = Catalog::from_entries([
            ("a".to_string(), "cat".to_string()),
            ("b".to_string(), "dog".to_string()),
        ]);
        let embedded = EmbeddedCatalog::build(&catalog, &lookup, 2).unwrap();
        (lookup, embedded)
    }

    fn pair(id: u64, t1: &str, t2: &str) -> TextPair {
        TextPair {
            id,
            text1: t1.to_string(),
            text2: t2.to_string(),
        }
    }

    #[test]
    fn test_rows_align_with_input_order() {
        let (lookup, catalog) = toy_world();
        let pairs = vec![
            pair(1, "cat", "cat"),
            pair(2, "cat", "dog"),
            pair(3, "dog", "dog"),
        ];
        let matrix = extract_features(&pairs, &lookup, &catalog);
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.width(), 2);
        // Self-pairs (rows 0 and 2) have direct similarity 1.0
        assert!((matrix.rows()[0][1] - 1.0).abs() < 1e-12);
        assert!((matrix.rows()[2][1] - 1.0).abs() < 1e-12);
        // The mixed pair (row 1) has orthogonal document vectors
        assert!(matrix.rows()[1][1].abs() < 1e-12);
    }

    #[test]
    fn test_empty_pair_list() {
        let (lookup, catalog) = toy_world();
        let matrix = extract_features(&[], &lookup, &catalog);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (lookup, catalog) = toy_world();
        let pairs: Vec<TextPair> = (0..64)
            .map(|i| pair(i, "cat dog", if i % 2 == 0 { "cat" } else { "dog" }))
            .collect();
        let matrix = extract_features(&pairs, &lookup, &catalog);
        for (i, p) in pairs.iter().enumerate() {
            let expected = extract_pair_features(&p.text1, &p.text2, &lookup, &catalog);
            assert_eq!(matrix.rows()[i], expected.as_row(), "row {i} misaligned");
        }
    }
}
