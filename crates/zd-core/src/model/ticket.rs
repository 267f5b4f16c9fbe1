//! Ticket as returned by the server after an import.

use super::common::{CustomField, Via};
use super::{is_false, is_zero, nullable, Enveloped};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub sharing_agreement_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub followup_ids: Vec<i64>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub via_followup_source_id: i64,
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
}

impl Enveloped for Ticket {
    const KEY: &'static str = "ticket";
}
