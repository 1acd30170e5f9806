//! Command-line argument parsing for record commands.
//!
//! Parsing is pure: a raw argument string goes in, a command or a
//! [`ParseError`] comes out. Nothing is applied to a book here.

pub mod edit;
pub mod syntax;
pub mod tokenizer;
pub mod util;

pub use edit::EditCommandParser;
pub use syntax::Prefix;
pub use tokenizer::{tokenize, ArgumentMultimap};
pub use util::{parse_index, IndexError};

use crate::error_codes;
use crate::messages;
use crate::model::ConstraintViolation;

/// Why a command line was rejected.
///
/// Every variant is terminal: the parse produces nothing on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Missing or malformed index, or stray text where a prefix was expected
    #[error("{}", messages::invalid_command_format(.usage))]
    InvalidFormat {
        usage: &'static str,
        #[source]
        cause: Option<IndexError>,
    },

    /// Valid index but no field to change
    #[error("At least one field to edit must be provided.")]
    NotEdited,

    /// First field value (in input order) that breaks its format rule
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// Single-valued prefixes given more than once, canonically ordered
    #[error("{}", messages::duplicate_prefixes(.0))]
    DuplicatePrefixes(Vec<Prefix>),
}

impl ParseError {
    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidFormat { .. } => error_codes::SB_PRS_001_INVALID_FORMAT,
            ParseError::NotEdited => error_codes::SB_PRS_002_NOT_EDITED,
            ParseError::Constraint(_) => error_codes::SB_PRS_003_FIELD_CONSTRAINT,
            ParseError::DuplicatePrefixes(_) => error_codes::SB_PRS_004_DUPLICATE_PREFIX,
        }
    }

    /// Short category name, e.g. `"invalid_format"`.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::InvalidFormat { .. } => "invalid_format",
            ParseError::NotEdited => "not_edited",
            ParseError::Constraint(_) => "field_constraint",
            ParseError::DuplicatePrefixes(_) => "duplicate_prefix",
        }
    }
}
