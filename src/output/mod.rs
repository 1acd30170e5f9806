//! JSON output module for CLI commands
//!
//! Provides schema-versioned response types shared by all subcommands.

pub mod command;

pub use command::{
    generate_execution_id, output_json, render_json, EditResponse, ErrorResponse, JsonResponse,
    OutputFormat, STARTBOOK_JSON_SCHEMA_VERSION,
};
