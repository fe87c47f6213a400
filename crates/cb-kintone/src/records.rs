//! Batch record operations (`/k/v1/records.json`).

use serde_json::{json, Value};
use tracing::instrument;

use crate::api::KintoneApi;
use crate::error::{Error, ErrorKind, Result};
use crate::types::{GetRecordsResult, PostRecordsResult, PutRecordsResult, RecordUpdate, StatusAction};

/// Kintone caps batch record operations at 100 entries per request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Batch record operations on one app.
#[derive(Debug)]
pub struct Records<'a> {
    api: &'a KintoneApi,
}

impl<'a> Records<'a> {
    pub(crate) fn new(api: &'a KintoneApi) -> Self {
        Self { api }
    }

    fn check_batch_size(&self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument(
                "batch must contain at least one record".to_string(),
            )));
        }
        if len > MAX_BATCH_SIZE {
            return Err(Error::new(ErrorKind::InvalidArgument(format!(
                "batch of {len} exceeds the {MAX_BATCH_SIZE}-record limit"
            ))));
        }
        Ok(())
    }

    /// Get records of an app, optionally filtered by a Kintone query string
    /// and restricted to the given field codes. Pagination belongs in the
    /// query string and is passed through verbatim.
    #[instrument(skip(self, fields))]
    pub async fn get(
        &self,
        app: u64,
        query: &str,
        fields: Option<&[&str]>,
        total_count: bool,
    ) -> Result<GetRecordsResult> {
        let client = self.api.client();
        let mut request = client
            .get(self.api.api_path("records"))
            .query("app", app.to_string());
        if !query.is_empty() {
            request = request.query("query", query);
        }
        if let Some(fields) = fields {
            for (i, field) in fields.iter().enumerate() {
                request = request.query(format!("fields[{i}]"), *field);
            }
        }
        if total_count {
            request = request.query("totalCount", "true");
        }
        client.send_json(request).await.map_err(Into::into)
    }

    /// Post up to 100 records; returns their ids and revisions.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn post(&self, app: u64, records: &[Value]) -> Result<PostRecordsResult> {
        self.check_batch_size(records.len())?;
        let client = self.api.client();
        let request = client
            .post(self.api.api_path("records"))
            .json_value(json!({ "app": app, "records": records }));
        client.send_json(request).await.map_err(Into::into)
    }

    /// Update up to 100 records.
    #[instrument(skip(self, updates), fields(count = updates.len()))]
    pub async fn put(&self, app: u64, updates: &[RecordUpdate]) -> Result<PutRecordsResult> {
        self.check_batch_size(updates.len())?;
        let client = self.api.client();
        let request = client
            .put(self.api.api_path("records"))
            .json(&json!({ "app": app, "records": updates }))?;
        client.send_json(request).await.map_err(Into::into)
    }

    /// Delete up to 100 records by id, optionally guarded by expected
    /// revisions (same order as `ids`).
    #[instrument(skip(self, ids, revisions), fields(count = ids.len()))]
    pub async fn delete(&self, app: u64, ids: &[u64], revisions: Option<&[i64]>) -> Result<()> {
        self.check_batch_size(ids.len())?;
        let mut body = json!({ "app": app, "ids": ids });
        if let Some(revisions) = revisions {
            body["revisions"] = json!(revisions);
        }
        let client = self.api.client();
        let request = client.delete(self.api.api_path("records")).json_value(body);
        client.execute(request).await?;
        Ok(())
    }

    /// Advance the process-management status of up to 100 records.
    #[instrument(skip(self, actions), fields(count = actions.len()))]
    pub async fn put_status(&self, app: u64, actions: &[StatusAction]) -> Result<PutRecordsResult> {
        self.check_batch_size(actions.len())?;
        let client = self.api.client();
        let request = client
            .put(self.api.api_path("records/status"))
            .json(&json!({ "app": app, "records": actions }))?;
        client.send_json(request).await.map_err(Into::into)
    }
}
