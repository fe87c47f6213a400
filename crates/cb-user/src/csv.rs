//! CSV import/export transport (`/v1/csv/{kind}.json`).
//!
//! Export is a plain GET returning CSV text. Import is a two-step flow:
//! upload the file to `/v1/file.json` for a file key, then queue the import
//! with that key. The import runs server-side as a task whose status is
//! polled via [`Csv::result`].

use std::path::Path;

use bytes::Bytes;
use serde_json::json;
use tracing::instrument;

use crate::api::UserApi;
use crate::error::{Error, ErrorKind, Result};
use crate::types::{CsvImportResult, CsvKind, CsvTaskStatus};

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileUploadResult {
    file_key: String,
}

/// CSV transport shared by the directory sub-APIs.
#[derive(Debug)]
pub struct Csv<'a> {
    api: &'a UserApi,
}

impl<'a> Csv<'a> {
    pub(crate) fn new(api: &'a UserApi) -> Self {
        Self { api }
    }

    /// Export a directory resource as CSV text.
    #[instrument(skip(self))]
    pub async fn get(&self, kind: CsvKind) -> Result<String> {
        let client = self.api.client();
        let request = client.get(self.api.api_path(&format!("csv/{kind}")));
        let response = client.execute(request).await?;
        response.text().await.map_err(Into::into)
    }

    /// Import a CSV file into a directory resource; returns the id of the
    /// server-side import task.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn post(&self, kind: CsvKind, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = Bytes::from(tokio::fs::read(path).await?);
        check_csv_header(&content)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{kind}.csv"));

        let client = self.api.client();
        let upload = client
            .post(self.api.api_path("file"))
            .file("file", &file_name, "text/csv", content);
        let uploaded: FileUploadResult = client.send_json(upload).await?;

        let import = client
            .post(self.api.api_path(&format!("csv/{kind}")))
            .json_value(json!({ "fileKey": uploaded.file_key }));
        let queued: CsvImportResult = client.send_json(import).await?;
        Ok(queued.id)
    }

    /// Status of a queued import task.
    #[instrument(skip(self))]
    pub async fn result(&self, id: &str) -> Result<CsvTaskStatus> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("csv/result"))
            .query("id", id);
        client.send_json(request).await.map_err(Into::into)
    }
}

/// Reject files the import endpoint would bounce anyway: empty files and
/// files whose first line does not parse as a CSV header row.
fn check_csv_header(content: &[u8]) -> Result<()> {
    if content.is_empty() {
        return Err(Error::new(ErrorKind::InvalidArgument(
            "CSV file is empty".to_string(),
        )));
    }
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content);
    let headers = reader.headers()?;
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(Error::new(ErrorKind::InvalidArgument(
            "CSV file has no header row".to_string(),
        )));
    }
    Ok(())
}
