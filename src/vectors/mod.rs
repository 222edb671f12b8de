// Word vector access and the similarity math built on top of it.

pub mod math;
pub mod traits;
pub mod word2vec;

pub use math::{
    cosine_distance, cosine_similarity, ZERO_VECTOR_DISTANCE, ZERO_VECTOR_SIMILARITY,
};
pub use traits::VectorLookup;
pub use word2vec::WordVectors;
