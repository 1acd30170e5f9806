//! Field prefixes understood by record commands.
//!
//! A prefix is a short marker such as `n/` that says which field the
//! following text belongs to.

use serde::{Serialize, Serializer};
use std::fmt;

/// Marker introducing one field value on the command line.
///
/// Declaration order is the canonical order used whenever several prefixes
/// are reported together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    Name,
    Phone,
    Email,
    Address,
    Industry,
    Funding,
    Valuation,
    Tag,
}

impl Prefix {
    /// Every prefix, in canonical order.
    pub const ALL: [Prefix; 8] = [
        Prefix::Name,
        Prefix::Phone,
        Prefix::Email,
        Prefix::Address,
        Prefix::Industry,
        Prefix::Funding,
        Prefix::Valuation,
        Prefix::Tag,
    ];

    /// Prefixes that may appear at most once per command.
    pub const SINGLE_VALUED: [Prefix; 7] = [
        Prefix::Name,
        Prefix::Phone,
        Prefix::Email,
        Prefix::Address,
        Prefix::Industry,
        Prefix::Funding,
        Prefix::Valuation,
    ];

    /// The marker text, e.g. `"n/"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Phone => "p/",
            Prefix::Email => "e/",
            Prefix::Address => "a/",
            Prefix::Industry => "i/",
            Prefix::Funding => "f/",
            Prefix::Valuation => "v/",
            Prefix::Tag => "t/",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
