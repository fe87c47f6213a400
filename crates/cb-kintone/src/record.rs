//! Single-record operations (`/k/v1/record.json`).

use serde_json::{json, Value};
use tracing::instrument;

use crate::api::KintoneApi;
use crate::error::Result;
use crate::types::{PostRecordResult, PutRecordResult, StatusAction};

/// Response envelope of `GET /k/v1/record.json`.
#[derive(Debug, serde::Deserialize)]
struct GetRecordResult {
    record: Value,
}

/// Single-record operations on one app.
#[derive(Debug)]
pub struct Record<'a> {
    api: &'a KintoneApi,
}

impl<'a> Record<'a> {
    pub(crate) fn new(api: &'a KintoneApi) -> Self {
        Self { api }
    }

    /// Get one record by id; returns the field code → value mapping.
    #[instrument(skip(self))]
    pub async fn get(&self, app: u64, id: u64) -> Result<Value> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("record"))
            .query("app", app.to_string())
            .query("id", id.to_string());
        let resp: GetRecordResult = client.send_json(request).await?;
        Ok(resp.record)
    }

    /// Create one record; returns its id and revision.
    #[instrument(skip(self, record))]
    pub async fn post(&self, app: u64, record: &Value) -> Result<PostRecordResult> {
        let client = self.api.client();
        let request = client
            .post(self.api.api_path("record"))
            .json_value(json!({ "app": app, "record": record }));
        client.send_json(request).await.map_err(Into::into)
    }

    /// Update one record, optionally guarded by an expected revision.
    #[instrument(skip(self, record))]
    pub async fn put(
        &self,
        app: u64,
        id: u64,
        record: &Value,
        revision: Option<&str>,
    ) -> Result<PutRecordResult> {
        let mut body = json!({ "app": app, "id": id, "record": record });
        if let Some(revision) = revision {
            body["revision"] = json!(revision);
        }
        let client = self.api.client();
        let request = client.put(self.api.api_path("record")).json_value(body);
        client.send_json(request).await.map_err(Into::into)
    }

    /// Advance the process-management status of one record.
    #[instrument(skip(self, action))]
    pub async fn put_status(&self, app: u64, action: &StatusAction) -> Result<PutRecordResult> {
        let mut body = serde_json::to_value(action)?;
        body["app"] = json!(app);
        let client = self.api.client();
        let request = client
            .put(self.api.api_path("record/status"))
            .json_value(body);
        client.send_json(request).await.map_err(Into::into)
    }
}
