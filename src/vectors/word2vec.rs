// In-memory word vector table, loadable from the Google word2vec binary
// format.
//
// The binary layout is an ASCII header "<vocab_count> <dim>\n" followed by
// one record per word: the word's bytes terminated by a single space, then
// `dim` little-endian f32 values. Records may additionally be separated by
// a newline, which we skip. The file must already be decompressed.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::traits::VectorLookup;

/// A word-to-vector table with a fixed dimension, shared read-only across
/// the whole run.
pub struct WordVectors {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl WordVectors {
    /// Build a table from explicit (word, vector) pairs.
    ///
    /// Used by tests and toy examples. Fails if any vector's length
    /// differs from `dim`.
    pub fn from_pairs(
        dim: usize,
        pairs: impl IntoIterator<Item = (String, Vec<f32>)>,
    ) -> Result<Self> {
        let mut vectors = HashMap::new();
        for (word, vec) in pairs {
            if vec.len() != dim {
                anyhow::bail!(
                    "Vector for {:?} has dimension {} but the table expects {}",
                    word,
                    vec.len(),
                    dim
                );
            }
            vectors.insert(word, vec);
        }
        Ok(Self { dim, vectors })
    }

    /// Load a pretrained model from a word2vec binary file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Word vector model not found: {}\n\
                 Set KINDRED_VECTORS to a decompressed word2vec .bin file.",
                path.display()
            );
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open word vector model {}", path.display()))?;
        let model = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse word vector model {}", path.display()))?;

        info!(
            words = model.vectors.len(),
            dim = model.dim,
            "Loaded word vector model"
        );
        Ok(model)
    }

    /// Parse the word2vec binary format from any reader.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut header = Vec::new();
        reader
            .read_until(b'\n', &mut header)
            .context("Failed to read word2vec header")?;
        let header = String::from_utf8_lossy(&header);
        let mut parts = header.split_whitespace();
        let vocab: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .context("word2vec header is missing the vocabulary count")?;
        let dim: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .context("word2vec header is missing the vector dimension")?;

        let mut vectors = HashMap::with_capacity(vocab);
        let mut float_buf = vec![0u8; dim * 4];

        for i in 0..vocab {
            let word = read_word(&mut reader)
                .with_context(|| format!("Failed to read word {} of {}", i + 1, vocab))?;

            reader
                .read_exact(&mut float_buf)
                .with_context(|| format!("Truncated vector for word {:?}", word))?;
            let vec: Vec<f32> = float_buf
                .chunks_exact(4)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect();

            vectors.insert(word, vec);
        }

        Ok(Self { dim, vectors })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl VectorLookup for WordVectors {
    fn dim(&self) -> usize {
        self.dim
    }

    fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }

    fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }
}

/// Read one space-terminated word, skipping record-separator newlines.
fn read_word(reader: &mut impl BufRead) -> Result<String> {
    let mut bytes = Vec::new();
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte).context("Unexpected EOF")?;
        match byte[0] {
            b' ' => break,
            b'\n' if bytes.is_empty() => continue,
            b => bytes.push(b),
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
