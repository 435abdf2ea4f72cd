//! Field validators
//!
//! Pure predicates over a single raw input value. They never fail and never
//! touch I/O; the validated reader decides what to do with a `false`.

/// Returns `true` if the value has at least one character
pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Returns `true` if the value is non-empty and made only of ASCII digits
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the value contains at least one `@`
///
/// No further address validation is attempted.
pub fn is_email_like(value: &str) -> bool {
    value.contains('@')
}

/// The three fields captured for every ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identification,
    Email,
    ComplaintType,
}

impl Field {
    /// Validator that gates this field
    pub fn validator(self) -> fn(&str) -> bool {
        match self {
            Self::Identification => is_numeric,
            Self::Email => is_email_like,
            Self::ComplaintType => is_non_empty,
        }
    }

    /// Name used in logs and errors
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identification => "identification",
            Self::Email => "email",
            Self::ComplaintType => "complaint type",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
