//! Command-line interface for radicado
//!
//! The binary has a single job, so there are no subcommands: running it
//! starts an intake session on the console.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::Parser;
use std::path::PathBuf;

/// Capture a complaint ticket and save it with a generated radicado
#[derive(Parser, Debug)]
#[command(name = "radicado", version, about, long_about = None)]
pub struct Cli {
    /// Directory the ticket record is written to (must exist)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file to read instead of ./radicado.{yaml,toml,json}
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the reference generator (defaults to the current time)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the result as JSON on stdout (prompts move to stderr)
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["radicado"]);
        assert!(cli.output_dir.is_none());
        assert!(!cli.json);

        let cli = Cli::parse_from([
            "radicado",
            "--output-dir",
            "out",
            "--seed",
            "42",
            "--json",
            "-v",
        ]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.json);
        assert!(cli.verbose);
    }
}
