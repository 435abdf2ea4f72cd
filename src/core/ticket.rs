use super::reference::{Reference, ReferenceGenerator};
use crate::error::{IntakeError, Result};
use rand::Rng;
use serde::Serialize;

/// A captured complaint ticket
///
/// Fields are private and there are no setters: a ticket cannot change after
/// [`Ticket::create`] returns it. Dropping the ticket releases everything it
/// owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    #[serde(rename = "radicado")]
    reference: Reference,
    identification: String,
    email: String,
    complaint_type: String,
}

impl Ticket {
    /// Create a ticket from already validated fields
    ///
    /// Format checks (numeric identification, `@` in the email) belong to the
    /// reader and are not repeated; the only check here is that no field is
    /// empty. Values are otherwise stored exactly as given. The reference is
    /// generated exactly once, here. Fails if the reference cannot be produced
    /// or a field is empty, and nothing is returned in either case.
    pub fn create<R: Rng>(
        identification: &str,
        email: &str,
        complaint_type: &str,
        generator: &mut ReferenceGenerator<R>,
    ) -> Result<Self> {
        let identification = identification.to_owned();
        let email = email.to_owned();
        let complaint_type = complaint_type.to_owned();
        let reference = generator.generate()?;

        let ticket = Self {
            reference,
            identification,
            email,
            complaint_type,
        };
        ticket.ensure_populated()?;
        Ok(ticket)
    }

    fn ensure_populated(&self) -> Result<()> {
        let missing = [
            ("identification", self.identification.is_empty()),
            ("email", self.email.is_empty()),
            ("complaint type", self.complaint_type.is_empty()),
        ]
        .into_iter()
        .find_map(|(name, empty)| empty.then_some(name));

        match missing {
            Some(name) => Err(IntakeError::TicketCreation(format!("{name} is empty"))),
            None => Ok(()),
        }
    }

    pub const fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn complaint_type(&self) -> &str {
        &self.complaint_type
    }

    /// Plain-text record, one labeled line per field
    pub fn to_record(&self) -> String {
        format!(
            "Radicado: {}\nIdentificación: {}\nCorreo: {}\nTipo de reclamación: {}\n",
            self.reference, self.identification, self.email, self.complaint_type
        )
    }
}
