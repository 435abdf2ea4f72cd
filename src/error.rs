//! Error types for radicado
//!
//! Every fatal condition of an intake run is represented here. Invalid input
//! is deliberately absent: it never leaves the validated reader, which keeps
//! prompting until the value passes.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Errors that end an intake run
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Standard input reached end-of-stream while a field was still required
    #[error("Input stream closed while reading {field}")]
    InputStreamClosed { field: String },

    /// The ticket or its reference could not be produced
    #[error("Failed to create ticket: {0}")]
    TicketCreation(String),

    /// The record file could not be created or written
    #[error("Failed to write ticket to {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A string did not have the `<timestamp>_<NNNN>` shape of a reference
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntakeError {
    /// Message shown to the person at the console
    pub fn user_message(&self) -> String {
        match self {
            Self::InputStreamClosed { field } => {
                format!("Input ended before {field} was provided")
            },
            Self::TicketCreation(_) => "Error creando ticket".to_string(),
            Self::FileWrite { path, source } => {
                format!("Error al crear el archivo {}: {source}", path.display())
            },
            _ => self.to_string(),
        }
    }

    /// Hints for resolving the error, if any apply
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputStreamClosed { .. } => vec![
                "Provide identification, email and complaint type on separate lines".to_string(),
            ],
            Self::FileWrite { path, .. } => {
                let dir = path
                    .parent()
                    .map_or_else(|| ".".to_string(), |p| p.display().to_string());
                vec![
                    format!("Make sure the directory '{dir}' exists and is writable"),
                    "Use --output-dir or RADICADO_OUTPUT_DIR to choose another directory"
                        .to_string(),
                ]
            },
            Self::Config(_) => vec![
                "Check radicado.yaml (or the file passed with --config) for typos".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether running the command again could succeed without code changes
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InputStreamClosed { .. } | Self::FileWrite { .. } | Self::Io(_)
        )
    }

    /// Whether the error originates from configuration loading
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
