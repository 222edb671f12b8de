// Document embedding: the average of a document's known word vectors.
//
// A document is lowercased and whitespace-split; each token that the lookup
// knows contributes its vector to a running sum, and the result is the
// element-wise mean. Tokens the lookup does not know are silently skipped —
// an expected outcome, not an error. Punctuation stripping is the caller's
// data-prep concern (the catalog loader pre-cleans its text; pair texts are
// embedded as-is, matching how the reference features were produced).
//
// When no token is known the document degrades to the zero vector of the
// lookup's dimension. Downstream cosine math tolerates this via the
// ZERO_VECTOR_DISTANCE policy, so empty or fully-unknown text flows through
// the whole pipeline without ever raising.

use crate::vectors::VectorLookup;

/// Embed raw text as the mean of its known tokens' word vectors.
///
/// Returns a vector of length `lookup.dim()`; the zero vector when no
/// token is known. Accumulates in f64 so results are independent of the
/// model's storage precision.
pub fn embed_document(text: &str, lookup: &dyn VectorLookup) -> Vec<f64> {
    let lowered = text.to_lowercase();
    embed_tokens(lowered.split_whitespace(), lookup)
}

/// Embed an already-tokenized document.
///
/// Entry point for callers that run the full normalizer first (catalog
/// text, the `rank` command); `embed_document` delegates here after its
/// plain lowercase-and-split. Tokens are used verbatim — no further
/// normalization.
pub fn embed_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    lookup: &dyn VectorLookup,
) -> Vec<f64> {
    let mut sum = vec![0.0_f64; lookup.dim()];
    let mut found = 0usize;

    for token in tokens {
        if let Some(vec) = lookup.get(token) {
            found += 1;
            for (acc, &v) in sum.iter_mut().zip(vec.iter()) {
                *acc += v as f64;
            }
        }
    }

    if found > 0 {
        let n = found as f64;
        for acc in &mut sum {
            *acc /= n;
        }
    }
    // found == 0 leaves the zero vector — deliberate policy, not an error

    sum
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
    fn test_single_known_token() {
        let vec = embed_document("cat", &toy_lookup());
        assert_eq!(vec, vec![1.0, 0.0]);
    }

    #[test]
    fn test_average_of_two_tokens() {
        let vec = embed_document("cat dog", &toy_lookup());
        assert!((vec[0] - 0.5).abs() < 1e-12);
        assert!((vec[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_tokens_skipped() {
        // "the" and "quick" are unknown; only "cat" contributes
        let vec = embed_document("the quick cat", &toy_lookup());
        assert_eq!(vec, vec![1.0, 0.0]);
    }

    #[test]
    fn test_case_insensitive() {
        let vec = embed_document("CAT Dog", &toy_lookup());
        assert!((vec[0] - 0.5).abs() < 1e-12);
        assert!((vec[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_known_tokens_yields_zero_vector() {
        let vec = embed_document("completely unknown words", &toy_lookup());
        assert_eq!(vec, vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_text_yields_zero_vector() {
        let vec = embed_document("", &toy_lookup());
        assert_eq!(vec, vec![0.0, 0.0]);
    }

    #[test]
    fn test_embed_tokens_matches_tokenized_text() {
        // The tokenizer-then-embed path used for pre-cleaned text agrees
        // with embedding the punctuation-stripped string directly.
        let lookup = toy_lookup();
        let tokens = crate::text::tokenize("Cat, dog!");
        let via_tokens = embed_tokens(tokens.iter().map(String::as_str), &lookup);
        let via_text = embed_document("cat dog", &lookup);
        assert_eq!(via_tokens, via_text);
        assert!((via_tokens[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_embed_tokens_empty_iterator() {
        let vec = embed_tokens(std::iter::empty(), &toy_lookup());
        assert_eq!(vec, vec![0.0, 0.0]);
    }

    #[test]
    fn test_duplicates_weight_the_average() {
        // "cat cat dog" -> (2*[1,0] + [0,1]) / 3
        let vec = embed_document("cat cat dog", &toy_lookup());
        assert!((vec[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((vec[1] - 1.0 / 3.0).abs() < 1e-12);
    }
}
