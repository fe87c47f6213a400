//! Title listing (`/v1/titles.json`).

use serde_json::Value;
use tracing::instrument;

use crate::api::UserApi;
use crate::error::Result;

#[derive(Debug, serde::Deserialize)]
struct GetTitlesResult {
    titles: Vec<Value>,
}

/// Title (job position) operations.
#[derive(Debug)]
pub struct Titles<'a> {
    api: &'a UserApi,
}

impl<'a> Titles<'a> {
    pub(crate) fn new(api: &'a UserApi) -> Self {
        Self { api }
    }

    /// Get titles, optionally filtered by id or code.
    #[instrument(skip(self, ids, codes))]
    pub async fn get(&self, ids: Option<&[u64]>, codes: Option<&[&str]>) -> Result<Vec<Value>> {
        let client = self.api.client();
        let mut request = client.get(self.api.api_path("titles"));
        if let Some(ids) = ids {
            for (i, id) in ids.iter().enumerate() {
                request = request.query(format!("ids[{i}]"), id.to_string());
            }
        }
        if let Some(codes) = codes {
            for (i, code) in codes.iter().enumerate() {
                request = request.query(format!("codes[{i}]"), *code);
            }
        }
        let resp: GetTitlesResult = client.send_json(request).await?;
        Ok(resp.titles)
    }
}
