//! Per-user organization/title assignments (`/v1/user/organizations.json`).

use serde_json::Value;
use tracing::instrument;

use crate::api::UserApi;
use crate::error::Result;
use crate::types::CsvKind;

#[derive(Debug, serde::Deserialize)]
struct GetUserOrganizationsResult {
    #[serde(rename = "organizationTitles")]
    organization_titles: Vec<Value>,
}

/// User-to-organization assignment operations.
#[derive(Debug)]
pub struct UserOrganizations<'a> {
    api: &'a UserApi,
}

impl<'a> UserOrganizations<'a> {
    pub(crate) fn new(api: &'a UserApi) -> Self {
        Self { api }
    }

    /// Get the organizations and titles of one user.
    #[instrument(skip(self))]
    pub async fn get(&self, code: &str) -> Result<Vec<Value>> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("user/organizations"))
            .query("code", code);
        let resp: GetUserOrganizationsResult = client.send_json(request).await?;
        Ok(resp.organization_titles)
    }

    /// Export all assignments as CSV text.
    pub async fn get_by_csv(&self) -> Result<String> {
        self.api.csv().get(CsvKind::UserOrganizations).await
    }

    /// Import assignments from a CSV file; returns the import task id.
    pub async fn post_by_csv(&self, path: impl AsRef<std::path::Path>) -> Result<String> {
        self.api.csv().post(CsvKind::UserOrganizations, path).await
    }
}
