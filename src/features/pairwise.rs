// Per-pair feature extraction: the two similarity signals the classifier
// consumes.
//
// job_similarity is second-order: each document is reduced to its distance
// profile against the occupation catalog, and the two profiles (vectors in
// catalog-size-dimensional space) are compared with cosine similarity. Two
// texts about the same person should relate to the occupation catalog the
// same way even with disjoint vocabulary. direct_similarity is the plain
// cosine similarity of the two averaged document vectors.

use serde::{Deserialize, Serialize};

use crate::catalog::EmbeddedCatalog;
use crate::embed::embed_document;
use crate::features::profile::distance_profile;
use crate::vectors::{cosine_similarity, VectorLookup};

/// The feature values extracted for one text pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PairFeatures {
    /// Cosine similarity of the two catalog distance profiles.
    pub job_similarity: f64,
    /// Cosine similarity of the two raw document vectors.
    pub direct_similarity: f64,
}

impl PairFeatures {
    /// Feature values in output-column order.
    pub fn as_row(&self) -> Vec<f64> {
        vec![self.job_similarity, self.direct_similarity]
    }
}

/// Extract both similarity features for one pair of raw texts.
///
/// Pure and deterministic given the lookup and catalog; absent tokens and
/// empty text degrade through the zero-vector policy and never fail.
pub fn extract_pair_features(
    text1: &str,
    text2: &str,
    lookup: &dyn VectorLookup,
    catalog: &EmbeddedCatalog,
) -> PairFeatures {
    let vec1 = embed_document(text1, lookup);
    let vec2 = embed_document(text2, lookup);

    let profile1 = distance_profile(&vec1, catalog);
    let profile2 = distance_profile(&vec2, catalog);

    PairFeatures {
        job_similarity: cosine_similarity(&profile1, &profile2),
        direct_similarity: cosine_similarity(&vec1, &vec2),
    }
}
