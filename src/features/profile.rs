// Distance profiles: a document's cosine distance to every catalog entry.
//
// The profile is the document's "shape" against the reference catalog — two
// snippets describing the same person should sit at similar distances from
// the same occupations even when their wording differs. Profiles are only
// comparable because every one of them follows the catalog's frozen sorted
// key order.

use crate::catalog::EmbeddedCatalog;
use crate::vectors::cosine_distance;

/// Compute a document vector's distance profile against the catalog.
///
/// Returns one cosine distance per catalog entry, in the catalog's frozen
/// key order; length always equals `catalog.len()`. A zero document vector
/// produces an all-`ZERO_VECTOR_DISTANCE` profile rather than an error.
/// O(catalog size x dim) — the dominant per-document cost, which is why
/// catalog vectors are embedded once and reused.
pub fn distance_profile(doc_vec: &[f64], catalog: &EmbeddedCatalog) -> Vec<f64> {
    catalog
        .vectors()
        .iter()
        .map(|entry_vec| cosine_distance(doc_vec, entry_vec))
        .collect()
}

/// Rank catalog entries by ascending distance to a document vector.
///
/// Sanity-check helper behind the `rank` subcommand: eyeballing the top
/// occupations for a known text is the fastest way to validate the model
/// and catalog wiring. Ties keep the catalog's key order.
pub fn rank_catalog<'a>(
    doc_vec: &[f64],
    catalog: &'a EmbeddedCatalog,
) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = catalog
        .keys()
        .iter()
        .map(String::as_str)
        .zip(distance_profile(doc_vec, catalog))
        .collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
