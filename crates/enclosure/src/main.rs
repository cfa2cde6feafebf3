//! Enclosure CLI - enclosing context for line ranges from the command line.
//!
//! Parses a source file with a bundled tree-sitter grammar and reports the
//! syntax node that spans a given range of lines, or checks that the file
//! parses at all.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use enclosure::{Language, LineRange};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::validators::{parse_language, parse_line_range};

/// Enclosure: find the syntax node enclosing a range of lines.
#[derive(Parser)]
#[command(name = "enclosure")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./.enclosure.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the node enclosing a line range
    Find {
        /// Source file to parse
        file: PathBuf,

        /// Line range, 1-based and inclusive (e.g., "12:15" or "12")
        #[arg(short, long, value_parser = parse_line_range)]
        lines: LineRange,

        /// Grammar to use (python, rust, csharp); detected from the extension by default
        #[arg(short = 'L', long, value_parser = parse_language)]
        language: Option<Language>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a file parses (dry run)
    Check {
        /// Source file to parse
        file: PathBuf,

        /// Grammar to use (python, rust, csharp); detected from the extension by default
        #[arg(short = 'L', long, value_parser = parse_language)]
        language: Option<Language>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Find {
            file,
            lines,
            language,
            json,
        } => cli::find::run(&file, lines, language, config, json)
            .await
            .map(|()| ExitCode::SUCCESS),
        Commands::Check {
            file,
            language,
            json,
        } => cli::check::run(&file, language, config, json)
            .await
            .map(|valid| {
                if valid {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Exit status for a failed command: 2 when the user can fix the request
/// (matching clap's usage errors), 1 otherwise.
fn exit_status(error: &enclosure::Error) -> u8 {
    if error.is_input_error() { 2 } else { 1 }
}
