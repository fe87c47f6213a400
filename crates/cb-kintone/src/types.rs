//! Typed request/response payloads for the Kintone application API.
//!
//! Kintone serializes numeric ids and revisions as JSON strings; the types
//! here keep them as strings and leave field values as `serde_json::Value`
//! (no schema validation of field types).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of `GET /k/v1/records.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecordsResult {
    /// Matched records, field code → `{type, value}` objects.
    pub records: Vec<Value>,
    /// Total matching count; present only when requested.
    #[serde(default)]
    pub total_count: Option<String>,
}

/// Result of posting a single record.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecordResult {
    pub id: String,
    pub revision: String,
}

/// Result of posting a batch of records.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecordsResult {
    pub ids: Vec<String>,
    pub revisions: Vec<String>,
}

/// Result of updating a single record.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRecordResult {
    pub revision: String,
}

/// Result of updating a batch of records.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRecordsResult {
    pub records: Vec<RecordRevision>,
}

/// Post-update id/revision pair.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRevision {
    pub id: String,
    pub revision: String,
}

/// One entry of a batch record update.
#[derive(Debug, Clone, Serialize)]
pub struct RecordUpdate {
    pub id: u64,
    pub record: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl RecordUpdate {
    pub fn new(id: u64, record: Value) -> Self {
        Self {
            id,
            record,
            revision: None,
        }
    }

    /// Guard the update with an expected revision.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }
}

/// One entry of a batch process-status update.
#[derive(Debug, Clone, Serialize)]
pub struct StatusAction {
    pub id: u64,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl StatusAction {
    pub fn new(id: u64, action: impl Into<String>) -> Self {
        Self {
            id,
            action: action.into(),
            assignee: None,
            revision: None,
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Result of a file upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResult {
    pub file_key: String,
}

/// Result of creating a space from a template.
#[derive(Debug, Clone, Deserialize)]
pub struct PostSpaceResult {
    pub id: String,
}
