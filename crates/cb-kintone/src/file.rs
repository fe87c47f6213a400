//! File upload/download (`/k/v1/file.json`).

use bytes::Bytes;
use tracing::instrument;

use crate::api::KintoneApi;
use crate::error::Result;
use crate::types::FileUploadResult;

/// File operations.
#[derive(Debug)]
pub struct File<'a> {
    api: &'a KintoneApi,
}

impl<'a> File<'a> {
    pub(crate) fn new(api: &'a KintoneApi) -> Self {
        Self { api }
    }

    /// Upload a file; the returned file key is referenced from record
    /// attachment fields.
    #[instrument(skip(self, content), fields(size = content.len()))]
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<String> {
        let client = self.api.client();
        let request = client
            .post(self.api.api_path("file"))
            .file("file", file_name, content_type, content);
        let resp: FileUploadResult = client.send_json(request).await?;
        Ok(resp.file_key)
    }

    /// Download a file by its file key.
    #[instrument(skip(self))]
    pub async fn download(&self, file_key: &str) -> Result<Bytes> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("file"))
            .query("fileKey", file_key);
        let response = client.execute(request).await?;
        response.bytes().await.map_err(Into::into)
    }
}
