//! Splits a raw argument string into a preamble and prefixed values.
//!
//! ```text
//! "2 n/Acme Robotics t/hardware p/91234567"
//!  ^ preamble
//!    ^^^^^^^^^^^^^^^^ Name  -> "Acme Robotics"
//!                     ^^^^^^^^^^^ Tag -> "hardware"
//!                                ^^^^^^^^^^^ Phone -> "91234567"
//! ```
//!
//! A prefix only counts when it starts the input or follows whitespace, so
//! `a/` inside `data/` is plain text. Each value runs up to the next counted
//! prefix and is trimmed. Text before the first prefix is the preamble.

use crate::parser::syntax::Prefix;
use crate::parser::ParseError;

/// Tokenized arguments, values kept in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    entries: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// All prefixed values in the order they were typed.
    pub fn entries(&self) -> impl Iterator<Item = (Prefix, &str)> + '_ {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Whether any prefix was recognized at all.
    pub fn has_fields(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Fail if any of `prefixes` occurs more than once.
    ///
    /// The error names every repeated prefix once, in canonical order,
    /// regardless of where the repeats appear or whether their values are
    /// valid.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let mut duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.entries.iter().filter(|(p, _)| p == prefix).count() > 1)
            .collect();

        if duplicated.is_empty() {
            return Ok(());
        }

        duplicated.sort();
        duplicated.dedup();
        Err(ParseError::DuplicatePrefixes(duplicated))
    }
}

/// Tokenize `args`, recognizing only the given `prefixes`.
///
/// Markers for prefixes not in the list are left in the surrounding text.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = find_all_prefix_positions(args, prefixes);
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let preamble = args[..preamble_end].trim().to_string();

    let entries = positions
        .iter()
        .enumerate()
        .map(|(i, (pos, prefix))| {
            let value_start = pos + prefix.as_str().len();
            let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
            (*prefix, args[value_start..value_end].trim().to_string())
        })
        .collect();

    ArgumentMultimap { preamble, entries }
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(pos, _)| starts_token(args, *pos))
                .map(move |(pos, _)| (pos, *prefix))
        })
        .collect()
}

/// A marker at `pos` starts a token if nothing but whitespace precedes it.
fn starts_token(args: &str, pos: usize) -> bool {
    args[..pos]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}
