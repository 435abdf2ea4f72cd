//! Test utilities for radicado
//!
//! Common fixtures shared by unit tests across the crate.

#![cfg(test)]

use crate::core::{ReferenceGenerator, Ticket};
use std::path::Path;
use tempfile::TempDir;

/// Temporary output directory for ticket records
pub struct TestOutputDir {
    pub temp_dir: TempDir,
}

impl TestOutputDir {
    /// Create a new empty output directory
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Number of `ticket_*.txt` files in the directory
    pub fn record_count(&self) -> usize {
        std::fs::read_dir(self.path())
            .expect("Failed to read temp dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                name.starts_with("ticket_") && name.ends_with(".txt")
            })
            .count()
    }
}

/// The ticket used throughout the tests: `123`, `a@b.com`, `billing`
pub fn sample_ticket() -> Ticket {
    create_test_ticket("123", "a@b.com", "billing")
}

/// Create a ticket with a reproducible reference
pub fn create_test_ticket(identification: &str, email: &str, complaint_type: &str) -> Ticket {
    let mut generator = ReferenceGenerator::seeded(0);
    Ticket::create(identification, email, complaint_type, &mut generator)
        .expect("Failed to create ticket")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_starts_empty() {
        let dir = TestOutputDir::new();
        assert!(dir.path().exists());
        assert_eq!(dir.record_count(), 0);
    }

    #[test]
    fn test_sample_ticket() {
        let ticket = sample_ticket();
        assert_eq!(ticket.identification(), "123");
        assert_eq!(ticket.email(), "a@b.com");
        assert_eq!(ticket.complaint_type(), "billing");
    }
}
