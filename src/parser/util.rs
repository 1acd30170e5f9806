//! Helpers shared by command parsers.

use crate::index::Index;

/// Preamble that is not a usable one-based index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Index is not a non-zero unsigned integer.")]
pub struct IndexError {
    /// The rejected text, after trimming
    pub input: String,
}

/// Parse `raw` as a one-based index.
///
/// Accepts plain decimal digits only: no sign, no inner whitespace, no
/// trailing text. Zero and values that overflow `usize` are rejected.
pub fn parse_index(raw: &str) -> Result<Index, IndexError> {
    let trimmed = raw.trim();
    let invalid = || IndexError {
        input: trimmed.to_string(),
    };

    // usize::from_str tolerates a leading '+'
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(invalid)
}
