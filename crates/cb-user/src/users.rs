//! User listing (`/v1/users.json`).

use serde_json::Value;
use tracing::instrument;

use crate::api::UserApi;
use crate::error::Result;

#[derive(Debug, serde::Deserialize)]
struct GetUsersResult {
    users: Vec<Value>,
}

/// User listing operations.
#[derive(Debug)]
pub struct Users<'a> {
    api: &'a UserApi,
}

impl<'a> Users<'a> {
    pub(crate) fn new(api: &'a UserApi) -> Self {
        Self { api }
    }

    /// Get users, optionally filtered by id or login code. No filter
    /// returns the whole directory page by page on the server side.
    #[instrument(skip(self, ids, codes))]
    pub async fn get(&self, ids: Option<&[u64]>, codes: Option<&[&str]>) -> Result<Vec<Value>> {
        let client = self.api.client();
        let mut request = client.get(self.api.api_path("users"));
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
        let resp: GetUsersResult = client.send_json(request).await?;
        Ok(resp.users)
    }
}
