use crate::error::{IntakeError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)_(\d{4})$").expect("reference pattern is valid"));

/// Upper bound (exclusive) of the random part of a reference
pub const SEQUENCE_SPAN: u16 = 10_000;

/// Ticket reference ("radicado")
///
/// Formatted as `<unix-timestamp>_<NNNN>`. References are not unique: two
/// tickets created in the same second collide with probability 1/10000 and
/// no collision check is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference {
    timestamp: i64,
    sequence: u16,
}

impl Reference {
    /// Build a reference from its parts
    pub fn new(timestamp: i64, sequence: u16) -> Result<Self> {
        if timestamp < 0 || sequence >= SEQUENCE_SPAN {
            return Err(IntakeError::InvalidReference(format!(
                "{timestamp}_{sequence:04}"
            )));
        }
        Ok(Self {
            timestamp,
            sequence,
        })
    }

    /// Parse a reference from its textual form
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || IntakeError::InvalidReference(s.to_string());
        let caps = REFERENCE_PATTERN.captures(s).ok_or_else(invalid)?;
        let timestamp = caps[1].parse::<i64>().map_err(|_| invalid())?;
        let sequence = caps[2].parse::<u16>().map_err(|_| invalid())?;
        Self::new(timestamp, sequence)
    }

    /// Unix timestamp (seconds) embedded in the reference
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Random part of the reference, in `0..10000`
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:04}", self.timestamp, self.sequence)
    }
}

impl std::str::FromStr for Reference {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Reference {
    type Error = IntakeError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.to_string()
    }
}

/// Produces references from an injected random source
///
/// The generator owns its RNG; there is no process-wide seeding. Construct
/// one per run and pass it to [`super::Ticket::create`].
pub struct ReferenceGenerator<R = StdRng> {
    rng: R,
}

impl ReferenceGenerator<StdRng> {
    /// Generator seeded from the current wall-clock time
    pub fn from_entropy_clock() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .map_or_else(|| now.timestamp().unsigned_abs(), i64::unsigned_abs);
        Self::seeded(seed)
    }

    /// Generator with a fixed seed, for reproducible references
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, "seeding reference generator");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReferenceGenerator<R> {
    /// Generator over any random source
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a reference stamped with the current time
    pub fn generate(&mut self) -> Result<Reference> {
        self.generate_at(Utc::now())
    }

    /// Generate a reference stamped with `now`
    pub fn generate_at(&mut self, now: DateTime<Utc>) -> Result<Reference> {
        let sequence = self.rng.gen_range(0..SEQUENCE_SPAN);
        let reference = Reference::new(now.timestamp(), sequence)
            .map_err(|e| IntakeError::TicketCreation(e.to_string()))?;
        tracing::debug!(%reference, "generated reference");
        Ok(reference)
    }
}
