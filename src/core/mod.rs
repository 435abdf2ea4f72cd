//! Core domain types
//!
//! A [`Ticket`] is the single entity of an intake run. Its [`Reference`] is
//! produced by a [`ReferenceGenerator`] that the caller constructs and owns.

mod reference;
mod ticket;

pub use reference::{Reference, ReferenceGenerator, SEQUENCE_SPAN};
pub use ticket::Ticket;
