//! Handler for the intake session
//!
//! Reads the three ticket fields, builds the ticket and writes its record.

use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::core::{ReferenceGenerator, Ticket};
use crate::error::Result;
use crate::input::LineReader;
use crate::storage::{TicketStore, TicketWriter};
use crate::validation::Field;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Parameters for an intake session
pub struct IntakeParams {
    pub config: Config,
    pub seed: Option<u64>,
}

/// Result of a completed intake
#[derive(Debug)]
pub struct IntakeOutcome {
    pub ticket: Ticket,
    pub path: PathBuf,
}

/// Handle an intake session on the process console
///
/// This function:
/// 1. Prompts for identification, email and complaint type on the console
///    (prompts go to stderr in JSON mode so stdout carries only the result)
/// 2. Builds the ticket with a freshly seeded reference generator
/// 3. Writes the record to the configured output directory
/// 4. Reports the generated reference
///
/// # Errors
///
/// Returns an error if:
/// - Standard input closes before all three fields are captured
/// - The reference cannot be generated
/// - The record file cannot be written
pub fn handle_intake_command(params: IntakeParams, formatter: &OutputFormatter) -> Result<()> {
    let IntakeParams { config, seed } = params;

    let mut generator = match seed {
        Some(seed) => ReferenceGenerator::seeded(seed),
        None => ReferenceGenerator::from_entropy_clock(),
    };
    let writer = TicketWriter::new(&config.output_dir);
    let mut reader = LineReader::stdio(config.reader_messages(), formatter.is_json());

    let outcome = run_intake(&mut reader, &config, &mut generator, &writer)?;
    report_outcome(&outcome, formatter)
}

/// Run one intake against arbitrary streams and store
///
/// Fields are read in prompt order. Nothing is stored unless all three are
/// captured and the ticket is created.
pub fn run_intake<R, W, G, S>(
    reader: &mut LineReader<R, W>,
    config: &Config,
    generator: &mut ReferenceGenerator<G>,
    store: &S,
) -> Result<IntakeOutcome>
where
    R: BufRead,
    W: Write,
    G: Rng,
    S: TicketStore + ?Sized,
{
    let mut read = |field: Field| {
        reader.read_validated(config.prompt(field), field.name(), field.validator())
    };

    let identification = read(Field::Identification)?;
    let email = read(Field::Email)?;
    let complaint_type = read(Field::ComplaintType)?;

    let ticket = Ticket::create(&identification, &email, &complaint_type, generator)?;
    tracing::debug!(reference = %ticket.reference(), "ticket created");

    let path = store.save(&ticket)?;
    Ok(IntakeOutcome { ticket, path })
}

fn report_outcome(outcome: &IntakeOutcome, formatter: &OutputFormatter) -> Result<()> {
    if formatter.is_json() {
        return formatter.print_json(&serde_json::json!({
            "status": "success",
            "radicado": outcome.ticket.reference(),
            "file": outcome.path,
            "ticket": outcome.ticket,
        }));
    }

    formatter.success("\nRegistro exitoso.");
    formatter.info(&format!(
        "Radicado generado: {}",
        outcome.ticket.reference()
    ));
    Ok(())
}
