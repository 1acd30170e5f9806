//! Positional index into a displayed startup list.
//!
//! Users address records by their one-based position in the list; the
//! record store works with zero-based offsets. [`Index`] holds both views so
//! callers never convert by hand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in an ordered collection.
///
/// Always refers to a valid one-based position (>= 1), so the zero-based
/// view can never underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Build an index from a zero-based offset.
    pub fn from_zero_based(zero_based: usize) -> Self {
        Index { zero_based }
    }

    /// Build an index from a one-based position.
    ///
    /// Returns `None` for `0`, which has no one-based meaning.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> usize {
        index.one_based()
    }
}

impl TryFrom<usize> for Index {
    type Error = String;

    fn try_from(one_based: usize) -> Result<Self, Self::Error> {
        Index::from_one_based(one_based).ok_or_else(|| "index must be at least 1".to_string())
    }
}
