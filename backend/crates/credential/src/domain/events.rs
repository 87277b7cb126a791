//! Submission Events
//!
//! Analytics payloads emitted after a password change is submitted.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Kind of submission event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitEventKind {
    PasswordChangeSuccess,
    PasswordChangeError,
}

/// Experiment the submission happened under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentTag {
    pub test_id: String,
    pub variant: String,
}

/// Analytics event for a submitted password change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEvent {
    #[serde(rename = "type")]
    pub kind: SubmitEventKind,
    #[serde(serialize_with = "iso_millis")]
    pub started_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_millis")]
    pub finished_at: DateTime<Utc>,
    /// Error message, only for [`SubmitEventKind::PasswordChangeError`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl SubmitEvent {
    pub fn success(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        experiment: Option<&ExperimentTag>,
    ) -> Self {
        Self::build(
            SubmitEventKind::PasswordChangeSuccess,
            started_at,
            finished_at,
            None,
            experiment,
        )
    }

    pub fn error(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        message: impl Into<String>,
        experiment: Option<&ExperimentTag>,
    ) -> Self {
        Self::build(
            SubmitEventKind::PasswordChangeError,
            started_at,
            finished_at,
            Some(message.into()),
            experiment,
        )
    }

    fn build(
        kind: SubmitEventKind,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        message: Option<String>,
        experiment: Option<&ExperimentTag>,
    ) -> Self {
        Self {
            kind,
            started_at,
            finished_at,
            message,
            test_id: experiment.map(|e| e.test_id.clone()),
            variant: experiment.map(|e| e.variant.clone()),
        }
    }
}

/// ISO 8601 with millisecond precision, e.g. `2026-10-16T08:30:00.123Z`
fn iso_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
