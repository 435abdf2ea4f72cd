//! Configuration for radicado
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. `radicado.{yaml,toml,json}` in the working directory, or the file
//!    passed with `--config`
//! 3. `RADICADO_*` environment variables (`__` separates nested keys, e.g.
//!    `RADICADO_PROMPTS__EMAIL`)
//! 4. Command-line flags, applied by the binary

use crate::error::Result;
use crate::input::ReaderMessages;
use crate::storage::DEFAULT_OUTPUT_DIR;
use crate::validation::Field;
use ::config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "radicado";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "RADICADO";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory ticket records are written to; must already exist
    pub output_dir: PathBuf,
    pub prompts: PromptConfig,
    pub messages: MessageConfig,
}

/// Prompt shown before each field is read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    pub identification: String,
    pub email: String,
    pub complaint_type: String,
}

/// Console messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    pub invalid_input: String,
    pub read_error: String,
}

impl Default for Config {
    fn default() -> Self {
        let messages = ReaderMessages::default();
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            prompts: PromptConfig {
                identification: "Ingrese identificación: ".to_string(),
                email: "Ingrese correo: ".to_string(),
                complaint_type: "Ingrese tipo de reclamación: ".to_string(),
            },
            messages: MessageConfig {
                invalid_input: messages.invalid_input,
                read_error: messages.read_error,
            },
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default file if present
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = ::config::Config::builder()
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("prompts.identification", defaults.prompts.identification)?
            .set_default("prompts.email", defaults.prompts.email)?
            .set_default("prompts.complaint_type", defaults.prompts.complaint_type)?
            .set_default("messages.invalid_input", defaults.messages.invalid_input)?
            .set_default("messages.read_error", defaults.messages.read_error)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(CONFIG_FILE_NAME).required(false)),
        };

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(output_dir = %config.output_dir.display(), "configuration loaded");
        Ok(config)
    }

    /// Override the output directory, e.g. from a command-line flag
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Prompt for a field
    pub fn prompt(&self, field: Field) -> &str {
        match field {
            Field::Identification => &self.prompts.identification,
            Field::Email => &self.prompts.email,
            Field::ComplaintType => &self.prompts.complaint_type,
        }
    }

    /// Messages for the validated reader
    pub fn reader_messages(&self) -> ReaderMessages {
        ReaderMessages {
            invalid_input: self.messages.invalid_input.clone(),
            read_error: self.messages.read_error.clone(),
        }
    }
}
