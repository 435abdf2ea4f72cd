//! Command handlers

mod intake;

pub use intake::{IntakeOutcome, IntakeParams, handle_intake_command, run_intake};
