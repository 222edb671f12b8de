// Text normalization: lowercase, strip punctuation, split on whitespace.
//
// This is the same cleaning the occupation catalog went through before the
// pretrained vectors were ever consulted, so catalog text and query text
// land in the same token space. Punctuation is replaced by a space rather
// than removed, which deliberately splits words joined by hyphens or
// slashes ("nurse/midwife" -> "nurse", "midwife").

/// Replace every ASCII punctuation character with a single space.
///
/// May produce runs of consecutive spaces; `tokenize` collapses them.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect()
}

/// Normalize raw text into an ordered token sequence.
///
/// Lowercases, strips punctuation to spaces, and splits on whitespace.
/// Order and duplicates are preserved; empty segments are dropped. Any
/// input (including the empty string) yields a possibly-empty token list.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(&text.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercase and strip punctuation without splitting.
///
/// Used by the catalog loader, which stores normalized text and tokenizes
/// later at embedding time.
pub fn normalize(text: &str) -> String {
    strip_punctuation(&text.to_lowercase())
}
