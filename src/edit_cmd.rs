//! Edit command implementation for Startbook
//!
//! Parses the edit arguments and, when a book is given, applies the edit to
//! the loaded book. The book file itself is never modified.

use anyhow::Result;
use startbook::error_codes;
use startbook::output::{generate_execution_id, output_json, EditResponse, ErrorResponse, JsonResponse};
use startbook::{EditCommandParser, EditStartupDescriptor, OutputFormat, StartupBook};
use std::path::PathBuf;

/// Report a failure in the requested format and turn it into an error.
///
/// JSON modes print an [`ErrorResponse`] on stdout; the returned error is
/// printed by `main` on stderr either way.
fn fail<E>(err: E, kind: &str, code: &str, output_format: OutputFormat, exec_id: &str) -> Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    if output_format != OutputFormat::Human {
        let response = ErrorResponse {
            error: kind.to_string(),
            code: code.to_string(),
            message: err.to_string(),
        };
        output_json(&JsonResponse::new(response, exec_id), output_format)?;
    }
    Err(err.into())
}

fn print_changes(changes: &EditStartupDescriptor) {
    if let Some(name) = changes.name() {
        println!("name: {}", name);
    }
    if let Some(phone) = changes.phone() {
        println!("phone: {}", phone);
    }
    if let Some(email) = changes.email() {
        println!("email: {}", email);
    }
    if let Some(address) = changes.address() {
        println!("address: {}", address);
    }
    if let Some(industry) = changes.industry() {
        println!("industry: {}", industry);
    }
    if let Some(stage) = changes.funding_stage() {
        println!("funding_stage: {}", stage);
    }
    if let Some(valuation) = changes.valuation() {
        println!("valuation: {}", valuation);
    }
    match changes.tags() {
        Some(tags) if tags.is_empty() => println!("tags: (cleared)"),
        Some(tags) => {
            let rendered: Vec<String> = tags.iter().map(|t| format!("[{}]", t)).collect();
            println!("tags: {}", rendered.join(""));
        }
        None => {}
    }
}

/// Run the edit command
///
/// Usage: startbook edit [--book <FILE>] <INDEX> [n/NAME] ...
pub fn run_edit(args: &str, book_path: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let exec_id = generate_execution_id();
    let span = tracing::info_span!("edit", exec_id = %exec_id);
    let _guard = span.enter();

    let command = match EditCommandParser::new().parse(args) {
        Ok(command) => command,
        Err(e) => {
            let (kind, code) = (e.kind(), e.code());
            tracing::debug!(code, "rejected edit arguments");
            return fail(e, kind, code, output_format, &exec_id);
        }
    };

    let result = match book_path {
        Some(path) => {
            let mut book = match StartupBook::load(&path) {
                Ok(book) => book,
                Err(e) => {
                    return fail(
                        e,
                        "book_unreadable",
                        error_codes::SB_IO_001_BOOK_UNREADABLE,
                        output_format,
                        &exec_id,
                    )
                }
            };
            match command.execute(&mut book) {
                Ok(result) => Some(result),
                Err(e) => {
                    let (kind, code) = (e.kind(), e.code());
                    return fail(e, kind, code, output_format, &exec_id);
                }
            }
        }
        None => None,
    };

    match output_format {
        OutputFormat::Json | OutputFormat::Pretty => {
            let response = EditResponse {
                index: command.index(),
                changes: command.descriptor(),
                result: result.as_ref(),
            };
            output_json(&JsonResponse::new(response, &exec_id), output_format)?;
        }
        OutputFormat::Human => match &result {
            Some(result) => println!("{}", result.feedback),
            None => {
                println!("index: {}", command.index());
                print_changes(command.descriptor());
            }
        },
    }

    Ok(())
}
