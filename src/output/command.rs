//! JSON output types for CLI commands
//!
//! Every JSON payload is wrapped in a [`JsonResponse`] carrying a schema
//! version and an execution id, so scripts can parse output from different
//! releases and correlate it with log lines.

use serde::{Deserialize, Serialize};

use crate::command::{CommandResult, EditStartupDescriptor};
use crate::index::Index;

/// Current JSON output schema version
pub const STARTBOOK_JSON_SCHEMA_VERSION: &str = "1.0.0";

/// Wrapper for all JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for parsing stability
    pub schema_version: String,
    /// Unique execution ID for this run
    pub execution_id: String,
    /// Tool name
    pub tool: String,
    /// RFC 3339 timestamp, second precision
    pub timestamp: String,
    /// Response data
    pub data: T,
}

impl<T> JsonResponse<T> {
    pub fn new(data: T, execution_id: &str) -> Self {
        JsonResponse {
            schema_version: STARTBOOK_JSON_SCHEMA_VERSION.to_string(),
            execution_id: execution_id.to_string(),
            tool: "startbook".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            data,
        }
    }
}

/// Response for the `edit` command
#[derive(Debug, Clone, Serialize)]
pub struct EditResponse<'a> {
    /// One-based target index
    pub index: Index,
    /// Fields the command changes
    pub changes: &'a EditStartupDescriptor,
    /// Set when the edit was applied to a book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a CommandResult>,
}

/// Error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category, e.g. "duplicate_prefix"
    pub error: String,
    /// Stable error code, e.g. "SB-PRS-004"
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Human,
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

impl OutputFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Some(OutputFormat::Human),
            "json" => Some(OutputFormat::Json),
            "pretty" => Some(OutputFormat::Pretty),
            _ => None,
        }
    }
}

/// Generate a unique execution ID for this run
pub fn generate_execution_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Serialize `data` per `format` (compact for Json, indented otherwise).
pub fn render_json<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<String> {
    let json = match format {
        OutputFormat::Json => serde_json::to_string(data)?,
        OutputFormat::Pretty | OutputFormat::Human => serde_json::to_string_pretty(data)?,
    };
    Ok(json)
}

/// Print `data` to stdout as JSON.
pub fn output_json<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_json(data, format)?);
    Ok(())
}
