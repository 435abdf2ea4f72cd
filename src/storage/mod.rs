//! Ticket persistence
//!
//! A finished ticket is written once, as a plain-text record, and never read
//! back by this crate.

mod file;
mod repository;

pub use file::{DEFAULT_OUTPUT_DIR, TicketWriter};
pub use repository::TicketStore;

#[cfg(test)]
pub use repository::MockTicketStore;
