//! radicado - Command-line complaint intake
//!
//! This is the main entry point for the radicado CLI application.
//! It parses arguments, loads configuration and runs one intake session.

use clap::Parser;
use radicado::cli::handlers::{IntakeParams, handle_intake_command};
use radicado::cli::{Cli, OutputFormatter};
use radicado::config::Config;
use radicado::error::{IntakeError, Result};
use std::process;
use tracing_subscriber::EnvFilter;

/// Main entry point for the radicado CLI
///
/// Exits with status 1 on any fatal error, including a failed file write.
fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the intake and handle errors
    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Set up logging on stderr
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, falling
/// back to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("radicado=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_output_dir(cli.output_dir);

    handle_intake_command(
        IntakeParams {
            config,
            seed: cli.seed,
        },
        formatter,
    )
}

/// Handle errors and display them to the user
///
/// This function formats errors in a user-friendly way, including:
/// - The main error message
/// - Any suggestions for fixing the error
/// - Additional context in verbose mode
fn handle_error(error: &IntakeError, formatter: &OutputFormatter) {
    // Display the main error message
    formatter.error(&error.user_message());

    // Display suggestions if available
    let suggestions = error.suggestions();
    if !suggestions.is_empty() && !formatter.is_json() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    // In JSON mode, output error as JSON
    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": format!("{:?}", error),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    // In verbose mode, show the full error chain
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
