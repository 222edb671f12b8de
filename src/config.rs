use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Word vector dimension used when KINDRED_DIM is unset. Matches the
/// pretrained GoogleNews word2vec release.
pub const DEFAULT_DIM: usize = 300;

/// Central configuration loaded from environment variables.
///
/// All paths come from env vars with local-data defaults. The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Decompressed word2vec binary model (KINDRED_VECTORS)
    pub vectors_path: PathBuf,
    /// Occupation catalog TSV (KINDRED_CATALOG)
    pub catalog_path: PathBuf,
    /// Train pair CSV (KINDRED_TRAIN)
    pub train_path: PathBuf,
    /// Test pair CSV (KINDRED_TEST)
    pub test_path: PathBuf,
    /// Output feature matrix file (KINDRED_OUT)
    pub out_path: PathBuf,
    /// Expected word vector dimension (KINDRED_DIM, default 300).
    /// A model with a different dimension fails at catalog-build time.
    pub dim: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let dim = match env::var("KINDRED_DIM") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("KINDRED_DIM must be a positive integer, got {raw:?}")
            })?,
            Err(_) => DEFAULT_DIM,
        };

        Ok(Self {
            vectors_path: path_var("KINDRED_VECTORS", "./data/googlenews.bin"),
            catalog_path: path_var("KINDRED_CATALOG", "./data/occupation_data.tsv"),
            train_path: path_var("KINDRED_TRAIN", "./data/train_pairs.csv"),
            test_path: path_var("KINDRED_TEST", "./data/test_pairs.csv"),
            out_path: path_var("KINDRED_OUT", "./data/features.txt"),
            dim,
        })
    }

    /// Check that the word vector model file is present.
    /// Call this before any operation that needs embeddings — the model
    /// load is slow, so fail on the path first.
    pub fn require_model(&self) -> Result<()> {
        if !self.vectors_path.exists() {
            anyhow::bail!(
                "Word vector model not found at {}\n\
                 Download the pretrained GoogleNews word2vec model, decompress it,\n\
                 and point KINDRED_VECTORS at the .bin file (see .env.example).",
                self.vectors_path.display()
            );
        }
        Ok(())
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
