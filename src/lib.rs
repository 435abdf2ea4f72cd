//! radicado - Command-line complaint intake
//!
//! This crate captures a single complaint ticket from the console:
//! - Prompts for identification, email and complaint type
//! - Re-prompts until each value passes its validator
//! - Attaches a generated reference ("radicado") to the ticket
//! - Writes a plain-text record to a timestamped file
//!
//! Each invocation handles exactly one ticket. Nothing is indexed or kept
//! between runs; the written file is the only artifact.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]

//! # Example
//!
//! ```rust,ignore
//! use radicado::core::{ReferenceGenerator, Ticket};
//! use radicado::storage::{TicketStore, TicketWriter};
//!
//! let mut generator = ReferenceGenerator::from_entropy_clock();
//! let ticket = Ticket::create("123", "a@b.com", "billing", &mut generator)?;
//!
//! let writer = TicketWriter::new("assets");
//! let path = writer.save(&ticket)?;
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod storage;
pub mod validation;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{IntakeError, Result};
