// Occupation catalog loader (O*NET-style tab-separated text).
//
// Each record is `code \t title \t description`. The key is the normalized
// title and the value is the normalized description — both lowercased with
// punctuation stripped, so catalog text matches the token space of the
// word vector model. Records without exactly three fields are skipped with
// a warning, never fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::Catalog;
use crate::text::normalize;

/// Load the occupation catalog from a tab-separated file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        anyhow::bail!(
            "Occupation catalog not found: {}\n\
             Set KINDRED_CATALOG to the occupation data .tsv file.",
            path.display()
        );
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open occupation catalog {}", path.display()))?;
    let catalog = parse_catalog(BufReader::new(file))?;

    info!(entries = catalog.len(), path = %path.display(), "Loaded occupation catalog");
    Ok(catalog)
}

/// Parse catalog records from any reader. Exposed for tests.
pub fn parse_catalog(reader: impl BufRead) -> Result<Catalog> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read catalog line")?;
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();

        if fields.len() != 3 {
            if !line.trim().is_empty() {
                skipped += 1;
                warn!(line = line_no + 1, "Skipping malformed catalog record");
            }
            continue;
        }

        // Column header from the upstream export
        if line_no == 0 && fields[1].eq_ignore_ascii_case("title") {
            continue;
        }

        let title = normalize(fields[1]);
        let description = normalize(fields[2]);
        entries.push((title, description));
    }

    if skipped > 0 {
        warn!(skipped, "Catalog records skipped as malformed");
    }

    Ok(Catalog::from_entries(entries))
}
