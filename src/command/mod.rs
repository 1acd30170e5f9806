//! Parsed commands and their execution against a [`StartupBook`].
//!
//! [`StartupBook`]: crate::model::StartupBook

pub mod edit;

pub use edit::{EditCommand, EditStartupDescriptor};

use serde::Serialize;

use crate::error_codes;
use crate::messages;
use crate::model::Startup;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,
    /// The record the command produced or changed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<Startup>,
}

impl CommandResult {
    pub fn new(feedback: String, startup: Option<Startup>) -> Self {
        CommandResult { feedback, startup }
    }
}

/// Why a well-formed command could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{}", messages::MESSAGE_INVALID_STARTUP_DISPLAYED_INDEX)]
    InvalidIndex,

    #[error("{}", EditCommand::MESSAGE_DUPLICATE_STARTUP)]
    DuplicateStartup,
}

impl CommandError {
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::InvalidIndex => error_codes::SB_CMD_001_INVALID_INDEX,
            CommandError::DuplicateStartup => error_codes::SB_CMD_002_DUPLICATE_STARTUP,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::InvalidIndex => "invalid_index",
            CommandError::DuplicateStartup => "duplicate_startup",
        }
    }
}
