//! Background job status (`/job_statuses`).

use super::{is_false, is_zero, nullable, Enveloped};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job lifecycle state. Values the server adds later land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Queued,
    Working,
    Completed,
    Failed,
    Killed,
    #[serde(untagged)]
    Other(String),
}

impl JobState {
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Queued => "queued",
            JobState::Working => "working",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
            JobState::Killed => "killed",
            JobState::Other(s) => s,
        }
    }

    /// Completed, failed and killed jobs never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Failed | JobState::Killed
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one item of a finished job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobResult {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub index: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub action: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub status: String,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "nullable")]
    pub success: bool,
}

/// Server-side state of one asynchronous job. Read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobStatus {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub message: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub progress: i64,
    /// Filled in once the job is terminal; empty while queued or working.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub results: Vec<JobResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobState>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub total: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub url: String,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        self.status.as_ref().is_some_and(JobState::is_terminal)
    }

    /// Results whose `success` flag is set.
    pub fn succeeded(&self) -> impl Iterator<Item = &JobResult> {
        self.results.iter().filter(|r| r.success)
    }

    pub fn failed_results(&self) -> impl Iterator<Item = &JobResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

impl Enveloped for JobStatus {
    const KEY: &'static str = "job_status";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Envelope;

    #[test]
    fn known_states_parse() {
        for (s, want) in [
            ("\"queued\"", JobState::Queued),
            ("\"working\"", JobState::Working),
            ("\"completed\"", JobState::Completed),
            ("\"failed\"", JobState::Failed),
            ("\"killed\"", JobState::Killed),
        ] {
            let got: JobState = serde_json::from_str(s).unwrap();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn unknown_state_passes_through() {
        let got: JobState = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(got, JobState::Other("paused".into()));
        assert!(!got.is_terminal());
        assert_eq!(serde_json::to_string(&got).unwrap(), "\"paused\"");
        assert_eq!(got.to_string(), "paused");
    }

    #[test]
    fn terminal_states() {
        assert!(JobState::Completed.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(JobState::Killed.is_terminal());
        assert!(!JobState::Queued.is_terminal());
        assert!(!JobState::Working.is_terminal());
        assert!(!JobStatus::default().is_terminal());
    }

    #[test]
    fn completed_status_keeps_result_order_through_json() {
        let status = JobStatus {
            id: "8b726e606741012ffc2d782bcb7848fe".into(),
            message: "Completed at 2024-01-02 10:00:00 +0000".into(),
            progress: 3,
            results: vec![
                JobResult {
                    id: 30,
                    index: 0,
                    action: "create".into(),
                    status: "Created".into(),
                    success: true,
                },
                JobResult {
                    id: 10,
                    index: 1,
                    action: "create".into(),
                    status: "Failed".into(),
                    success: false,
                },
                JobResult {
                    id: 20,
                    index: 2,
                    action: "update".into(),
                    status: "Updated".into(),
                    success: true,
                },
            ],
            status: Some(JobState::Completed),
            total: 3,
            url: "https://acme.zendesk.com/api/v2/job_statuses/8b72.json".into(),
        };
        let json = serde_json::to_string(&status).unwrap();
        let back: JobStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
        let ids: Vec<i64> = back.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(back.succeeded().count(), 2);
        assert_eq!(back.failed_results().next().map(|r| r.id), Some(10));
    }

    #[test]
    fn zero_fields_are_omitted() {
        let status = JobStatus {
            id: "abc123".into(),
            status: Some(JobState::Queued),
            total: 2,
            ..Default::default()
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"id":"abc123","status":"queued","total":2}"#);
    }

    #[test]
    fn nulls_decode_as_defaults() {
        let body = r#"{"job_status":{"id":"abc","url":null,"total":2,"progress":null,
            "status":"queued","message":null,"results":null}}"#;
        let status = serde_json::from_str::<Envelope<JobStatus>>(body)
            .unwrap()
            .into_inner();
        assert_eq!(status.id, "abc");
        assert_eq!(status.progress, 0);
        assert!(status.results.is_empty());
        assert!(status.message.is_empty());
        assert_eq!(status.status, Some(JobState::Queued));
    }
}
