//! Sub-records shared by tickets and ticket imports.

use super::{is_zero, nullable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One custom field value. `value` is whatever JSON the field type takes
/// (string, number, bool, list of tags) and is sent even when null, which
/// clears the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    pub value: Value,
}

/// How a ticket or comment entered Zendesk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Via {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ViaSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViaSource {
    #[serde(skip_serializing_if = "Map::is_empty", deserialize_with = "nullable")]
    pub from: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty", deserialize_with = "nullable")]
    pub to: Map<String, Value>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub rel: String,
}

/// Email CC change on a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailCc {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub user_id: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub user_email: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub user_name: String,
    /// `put` or `delete`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub action: String,
}

/// CC entry accepted on ticket creation: an existing user id, an email, or a
/// name/email pair for a user that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collaborator {
    Id(i64),
    Email(String),
    Person { name: String, email: String },
}

/// Requester to create on the fly when `requester_id` is not known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requester {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub locale_id: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub email: String,
}

impl Requester {
    pub fn is_empty(&self) -> bool {
        self.locale_id == 0 && self.name.is_empty() && self.email.is_empty()
    }
}

/// Historical comment carried by an import. `created_at` may be in the past.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketComment {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub id: i64,
    #[serde(
        rename = "type",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub body: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub html_body: String,
    /// `None` leaves the server default (public).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub author_id: i64,
    /// Upload tokens from `/uploads.json`.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub uploads: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
