//! Ticket payload for `/imports/tickets` (archival and bulk import).
//!
//! Unlike a normal create, an import may carry backdated timestamps and a
//! full comment history. The client sends the timestamps exactly as given.

use super::common::{Collaborator, CustomField, EmailCc, Requester, TicketComment, Via};
use super::{is_false, is_zero, nullable, Enveloped};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket to import. Every zero-valued field is left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketImport {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub external_id: String,
    #[serde(
        rename = "type",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub subject: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub raw_subject: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub priority: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub recipient: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub requester_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub submitter_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub assignee_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub organization_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub group_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub collaborator_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub follower_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub email_cc_ids: Vec<i64>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub forum_topic_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub problem_id: i64,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "nullable")]
    pub has_incidents: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub custom_fields: Vec<CustomField>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub email_ccs: Vec<EmailCc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub sharing_agreement_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub followup_ids: Vec<i64>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub via_followup_source_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub macro_ids: Vec<i64>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub ticket_form_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub brand_id: i64,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "nullable")]
    pub allow_channelback: bool,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "nullable")]
    pub allow_attachments: bool,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "nullable")]
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Write-only: CCs by id, email or name/email.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub collaborators: Vec<Collaborator>,
    /// Write-only; the server rejects an import without at least one comment.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub comments: Vec<TicketComment>,
    /// Write-only: creates the requester if it does not exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Requester>,
}

/// Something the server is known to reject, found before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportProblem {
    NoComments,
    NoRequester,
}

impl fmt::Display for ImportProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportProblem::NoComments => write!(f, "at least one comment is required"),
            ImportProblem::NoRequester => {
                write!(f, "requester_id or requester (name/email) is required")
            }
        }
    }
}

impl TicketImport {
    /// Local check for the fields an import cannot do without. The submitter
    /// does not call this; the server stays the authority.
    pub fn validate(&self) -> Vec<ImportProblem> {
        let mut problems = Vec::new();
        if self.comments.is_empty() {
            problems.push(ImportProblem::NoComments);
        }
        let has_requester = self.requester_id != 0
            || self.requester.as_ref().is_some_and(|r| !r.is_empty());
        if !has_requester {
            problems.push(ImportProblem::NoRequester);
        }
        problems
    }
}

impl Enveloped for TicketImport {
    const KEY: &'static str = "ticket";
}

impl Enveloped for [TicketImport] {
    const KEY: &'static str = "tickets";
}

/// Query options for both import calls.
///
/// `Default` is `archive_immediately = false`; passing no options is the same
/// as passing the default. The flag is always written to the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketImportOptions {
    /// Archive the ticket right after creation (only valid for closed tickets).
    pub archive_immediately: bool,
}

impl TicketImportOptions {
    pub(crate) fn query_pairs(&self) -> [(&'static str, String); 1] {
        [("archive_immediately", self.archive_immediately.to_string())]
    }
}
