//! Terminal output formatting
//!
//! Human-readable messages go through [`OutputFormatter`] so `--json` and
//! `--no-color` are honoured in one place. Prompts are not routed here; the
//! line reader writes them directly.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Output formatter for console messages
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter
    ///
    /// `no_color` disables ANSI colors process-wide.
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    /// Whether results are printed as JSON
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message (suppressed in JSON mode)
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    /// Print an informational message (suppressed in JSON mode)
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    /// Print a value as pretty JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
