// Kindred: pairwise semantic features for same-person detection.
//
// This is the library root. Each module corresponds to a stage of the
// feature extraction pipeline: raw text in, word vectors in the middle,
// similarity features out.

pub mod catalog;
pub mod config;
pub mod embed;
pub mod features;
pub mod pairs;
pub mod pipeline;
pub mod text;
pub mod vectors;
