//! Startbook: a command-line tracker for startup contacts
//!
//! Startbook keeps an ordered list of startups (name, phone, email, address,
//! industry, funding stage, valuation and tags) and changes them through
//! short prefixed commands such as:
//!
//! ```text
//! edit 2 p/91234567 e/hello@acme.io t/potential
//! ```
//!
//! # Index Conventions
//!
//! - **Displayed positions**: 1-indexed (the first startup is `1`)
//! - **Book offsets**: 0-indexed, see [`Index`]
//!
//! # Parsing
//!
//! Parsing is pure and all-or-nothing. [`EditCommandParser::parse`] returns
//! either a complete [`EditCommand`] or the first [`ParseError`]; applying
//! the command to a [`StartupBook`] is a separate step
//! ([`EditCommand::execute`]).
//!
//! ```
//! use startbook::EditCommandParser;
//!
//! let command = EditCommandParser::new().parse("3 t/").unwrap();
//! assert_eq!(command.index().one_based(), 3);
//! assert!(command.descriptor().tags().unwrap().is_empty());
//! ```

pub mod command;
pub mod config;
pub mod error_codes;
pub mod index;
pub mod messages;
pub mod model;
pub mod output;
pub mod parser;

pub use command::{CommandError, CommandResult, EditCommand, EditStartupDescriptor};
pub use config::AppConfig;
pub use index::Index;
pub use model::{
    Address, BookError, ConstraintViolation, Email, FundingStage, Industry, Name, Phone, Startup,
    StartupBook, Tag, Valuation,
};
pub use output::{generate_execution_id, output_json, JsonResponse, OutputFormat};
pub use parser::{tokenize, ArgumentMultimap, EditCommandParser, IndexError, ParseError, Prefix};
