//! Wire models for the Zendesk resources this client touches.
//!
//! Outbound payloads drop every field that holds its zero value (0, "", [],
//! false, None), so a request carries only what the caller set. Inbound
//! decoding is lenient: missing keys and explicit `null`s both fall back to
//! the field default.

mod common;
mod envelope;
mod job_status;
mod ticket;
mod ticket_import;

pub use common::{Collaborator, CustomField, EmailCc, Requester, TicketComment, Via, ViaSource};
pub use envelope::{Envelope, Enveloped};
pub use job_status::{JobResult, JobState, JobStatus};
pub use ticket::Ticket;
pub use ticket_import::{ImportProblem, TicketImport, TicketImportOptions};

use serde::{Deserialize, Deserializer};

pub(crate) fn is_zero(v: &i64) -> bool {
    *v == 0
}

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}

/// Treat an explicit JSON `null` like a missing key.
pub(crate) fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
