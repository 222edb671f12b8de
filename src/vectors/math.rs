// Cosine similarity and distance with an explicit zero-vector policy.
//
// Cosine distance is 1 - (u.v)/(|u||v|). The formula divides by zero when
// either vector has zero norm — which legitimately happens here whenever a
// document contains no known tokens and degrades to the zero vector. The
// original pipeline left that case to whatever the numeric library did
// (NaN plus a runtime warning); we pin it to a fixed value instead so
// profiles stay comparable everywhere.

/// Cosine distance assigned when either input has zero norm.
///
/// 1.0 = maximal dissimilarity: a document with no known tokens is treated
/// as similar to nothing. The same value applies to zero distance profiles,
/// so no NaN can escape the pipeline.
pub const ZERO_VECTOR_DISTANCE: f64 = 1.0;

/// Similarity counterpart of the zero-norm fallback: `1 - ZERO_VECTOR_DISTANCE`.
pub const ZERO_VECTOR_SIMILARITY: f64 = 1.0 - ZERO_VECTOR_DISTANCE;

/// Cosine similarity between two vectors, in [-1.0, 1.0].
///
/// Returns `ZERO_VECTOR_SIMILARITY` when either vector has zero norm.
/// Both inputs must have the same length; the catalog builder enforces
/// this at construction time so it never fails per-call.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "cosine inputs must share a dimension");

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = norm_a * norm_b;
    if denom < f64::EPSILON {
        ZERO_VECTOR_SIMILARITY
    } else {
        // Float error can push near-parallel vectors a hair past 1.0
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Cosine distance: `1 - cosine_similarity`, with the same zero-norm policy.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    1.0 - cosine_similarity(a, b)
}
