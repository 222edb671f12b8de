// Similarity features derived from document embeddings.

pub mod matrix;
pub mod pairwise;
pub mod profile;
pub mod scale;

pub use matrix::FeatureMatrix;
pub use pairwise::{extract_pair_features, PairFeatures};
pub use profile::{distance_profile, rank_catalog};
