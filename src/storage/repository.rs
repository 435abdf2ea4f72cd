use crate::core::Ticket;
use crate::error::Result;
use std::path::PathBuf;

/// Store trait for persisting a captured ticket
///
/// This trait defines where a finished ticket goes, allowing the intake flow
/// to run against the file writer or a test double.
#[cfg_attr(test, mockall::automock)]
pub trait TicketStore {
    /// Persists a ticket, returning the location of the written record
    fn save(&self, ticket: &Ticket) -> Result<PathBuf>;
}

use super::file::TicketWriter;

impl TicketStore for TicketWriter {
    fn save(&self, ticket: &Ticket) -> Result<PathBuf> {
        self.write(ticket)
    }
}
