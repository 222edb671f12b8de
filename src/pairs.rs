// Pair source: the train/test CSVs of candidate same-person text pairs.
//
// Each row carries a numeric pair id plus two (title, body) snippets
// scraped from search results. The document text we embed is
// `title + " " + body` for each side. Rows are keyed by pair id and
// returned in ascending id order — that order is what aligns feature rows
// with the external label file, so it must be stable across runs.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// One candidate pair: two raw text snippets that may describe the same
/// person.
#[derive(Debug, Clone)]
pub struct TextPair {
    pub id: u64,
    pub text1: String,
    pub text2: String,
}

// CSV layout of the search-result export.
const COL_ID: usize = 0;
const COL_TITLE1: usize = 2;
const COL_TEXT1: usize = 3;
const COL_TITLE2: usize = 5;
const COL_TEXT2: usize = 6;

/// Load pairs from a CSV file, ordered by ascending pair id.
pub fn load_pairs(path: &Path) -> Result<Vec<TextPair>> {
    if !path.exists() {
        anyhow::bail!("Pair file not found: {}", path.display());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open pair file {}", path.display()))?;
    let pairs = parse_pairs(file)
        .with_context(|| format!("Failed to parse pair file {}", path.display()))?;

    info!(pairs = pairs.len(), path = %path.display(), "Loaded text pairs");
    Ok(pairs)
}

/// Parse pair rows from any reader. The first row is a header.
///
/// Malformed rows (missing columns, unparseable id) are skipped with a
/// warning. A duplicated pair id keeps the last row.
pub fn parse_pairs(reader: impl Read) -> Result<Vec<TextPair>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut by_id: BTreeMap<u64, (String, String)> = BTreeMap::new();
    let mut skipped = 0usize;

    for (row_no, record) in csv_reader.records().enumerate() {
        let record = record.context("Failed to read CSV record")?;

        let parsed = record
            .get(COL_ID)
            .and_then(|id| id.trim().parse::<u64>().ok())
            .and_then(|id| {
                let title1 = record.get(COL_TITLE1)?;
                let text1 = record.get(COL_TEXT1)?;
                let title2 = record.get(COL_TITLE2)?;
                let text2 = record.get(COL_TEXT2)?;
                Some((id, format!("{title1} {text1}"), format!("{title2} {text2}")))
            });

        match parsed {
            Some((id, text1, text2)) => {
                by_id.insert(id, (text1, text2));
            }
            None => {
                skipped += 1;
                warn!(row = row_no + 2, "Skipping malformed pair row");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "Pair rows skipped as malformed");
    }

    Ok(by_id
        .into_iter()
        .map(|(id, (text1, text2))| TextPair { id, text1, text2 })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,url1,title1,text1,url2,title2,text2\n";

    #[test]
    fn test_parse_basic() {
        let data = format!(
            "{HEADER}\
             1,u,Engineer,builds systems,u,Manager,runs teams\n\
             2,u,Nurse,cares for patients,u,Doctor,treats illness\n"
        );
        let pairs = parse_pairs(data.as_bytes()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].id, 1);
        assert_eq!(pairs[0].text1, "Engineer builds systems");
        assert_eq!(pairs[0].text2, "Manager runs teams");
    }

    #[test]
    fn test_ordered_by_id_not_file_order() {
        let data = format!(
            "{HEADER}\
             5,u,B,b,u,B,b\n\
             1,u,A,a,u,A,a\n"
        );
        let pairs = parse_pairs(data.as_bytes()).unwrap();
        assert_eq!(pairs[0].id, 1);
        assert_eq!(pairs[1].id, 5);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let data = format!(
            "{HEADER}\
             1,u,\"Smith, John\",\"likes cats, dogs\",u,T,t\n"
        );
        let pairs = parse_pairs(data.as_bytes()).unwrap();
        assert_eq!(pairs[0].text1, "Smith, John likes cats, dogs");
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let data = format!(
            "{HEADER}\
             not-a-number,u,A,a,u,A,a\n\
             2,u,too,short\n\
             3,u,B,b,u,B,b\n"
        );
        let pairs = parse_pairs(data.as_bytes()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].id, 3);
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let data = format!(
            "{HEADER}\
             1,u,First,a,u,First,a\n\
             1,u,Second,b,u,Second,b\n"
        );
        let pairs = parse_pairs(data.as_bytes()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].text1, "Second b");
    }

    #[test]
    fn test_empty_file_yields_no_pairs() {
        let pairs = parse_pairs(HEADER.as_bytes()).unwrap();
        assert!(pairs.is_empty());
    }
}
