// Vector lookup trait — swap-ready abstraction.
//
// The production lookup is a pretrained word2vec model loaded from disk,
// but tests and the worked examples use tiny hand-built tables. Everything
// downstream (embedder, catalog, pipeline) only sees this trait.

/// Read-only token-to-vector lookup with a fixed dimension.
pub trait VectorLookup: Sync {
    /// Dimension D shared by every vector in the lookup.
    fn dim(&self) -> usize;

    /// Whether the lookup knows this token.
    fn contains(&self, token: &str) -> bool;

    /// The vector for a token, or None for unknown tokens. Never panics.
    fn get(&self, token: &str) -> Option<&[f32]>;
}
