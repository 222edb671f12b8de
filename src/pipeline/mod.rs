// Batch driver: applies the pairwise extractor across a pair list.

pub mod extract;

pub use extract::extract_features;
