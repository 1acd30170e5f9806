//! Startbook CLI - command-line tracker for startup contacts
//!
//! Usage: startbook <command> [arguments]

mod cli;
mod edit_cmd;
mod version;

use startbook::AppConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{parse_args, print_usage, Command};

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter {:?}: {}", config.log_filter, e);
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    init_logging(&config);

    match parse_args() {
        Ok(Command::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{}", version::version());
            ExitCode::SUCCESS
        }
        Ok(Command::Edit {
            args,
            book_path,
            output_format,
        }) => {
            let output_format = output_format.unwrap_or(config.output_format);
            if let Err(e) = edit_cmd::run_edit(&args, book_path, output_format) {
                eprintln!("Error: {}", e);
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            ExitCode::from(1)
        }
    }
}
