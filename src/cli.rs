//! CLI argument parsing for Startbook
//!
//! Defines the Command enum and parse_args() function for all CLI commands.
//! Record-level arguments (index and `n/`, `p/`, ... fields) are not
//! interpreted here; they are joined and handed to the command's own parser.

use anyhow::Result;
use startbook::{EditCommand, OutputFormat};
use std::path::PathBuf;

pub fn print_usage() {
    eprintln!("Startbook - Command-line tracker for startup contacts");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  startbook <command> [arguments]");
    eprintln!("  startbook --help");
    eprintln!("  startbook --version");
    eprintln!();
    eprintln!("  startbook edit [--book <FILE>] [--output <FORMAT>] [--] <INDEX> [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [i/INDUSTRY] [f/FUNDING_STAGE] [v/VALUATION] [t/TAG]...");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  edit      Parse an edit and, with --book, apply it to a loaded book");
    eprintln!();
    eprintln!("Global arguments:");
    eprintln!("  --output <FORMAT>   Output format: human (default), json (compact), or pretty (formatted)");
    eprintln!();
    eprintln!("Edit arguments:");
    eprintln!("  --book <FILE>       JSON array of startups to apply the edit to (never written back)");
    eprintln!("  --                  Treat everything after this as edit fields");
    eprintln!();
    eprintln!("{}", EditCommand::MESSAGE_USAGE);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STARTBOOK_LOG       Log filter (default: warn)");
    eprintln!("  STARTBOOK_OUTPUT    Default output format");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Edit {
        /// Raw edit arguments, joined with single spaces
        args: String,
        book_path: Option<PathBuf>,
        /// Explicit `--output`; falls back to configuration when absent
        output_format: Option<OutputFormat>,
    },
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid output format: {}. Must be human, json, or pretty",
            value
        )
    })
}

/// Parse CLI arguments (including the program name) into a Command
pub fn parse_args_impl(args: &[String]) -> Result<Command> {
    if args.len() < 2 {
        return Err(anyhow::anyhow!("Missing command"));
    }

    let command = &args[1];

    if command == "--version" || command == "-V" {
        return Ok(Command::Version);
    }

    if command == "--help" || command == "-h" {
        return Ok(Command::Help);
    }

    match command.as_str() {
        "edit" => {
            let mut book_path: Option<PathBuf> = None;
            let mut output_format: Option<OutputFormat> = None;
            let mut fields: Vec<String> = Vec::new();

            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--book" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--book requires an argument"));
                        }
                        book_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    }
                    "--output" => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("--output requires an argument"));
                        }
                        output_format = Some(parse_output_format(&args[i + 1])?);
                        i += 2;
                    }
                    "--" => {
                        fields.extend(args[i + 1..].iter().cloned());
                        break;
                    }
                    _ => {
                        fields.push(args[i].clone());
                        i += 1;
                    }
                }
            }

            Ok(Command::Edit {
                args: fields.join(" "),
                book_path,
                output_format,
            })
        }
        _ => Err(anyhow::anyhow!("Unknown command: {}", command)),
    }
}

/// Parse the process arguments
pub fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();
    parse_args_impl(&args)
}
