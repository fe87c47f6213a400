//! Organization listing and membership (`/v1/organizations.json`,
//! `/v1/organization/users.json`).

use serde_json::Value;
use tracing::instrument;

use crate::api::UserApi;
use crate::error::Result;

#[derive(Debug, serde::Deserialize)]
struct GetOrganizationsResult {
    organizations: Vec<Value>,
}

#[derive(Debug, serde::Deserialize)]
struct GetOrganizationUsersResult {
    #[serde(rename = "userTitles")]
    user_titles: Vec<Value>,
}

/// Organization operations.
#[derive(Debug)]
pub struct Organizations<'a> {
    api: &'a UserApi,
}

impl<'a> Organizations<'a> {
    pub(crate) fn new(api: &'a UserApi) -> Self {
        Self { api }
    }

    /// Get organizations, optionally filtered by id or code.
    #[instrument(skip(self, ids, codes))]
    pub async fn get(&self, ids: Option<&[u64]>, codes: Option<&[&str]>) -> Result<Vec<Value>> {
        let client = self.api.client();
        let mut request = client.get(self.api.api_path("organizations"));
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
        let resp: GetOrganizationsResult = client.send_json(request).await?;
        Ok(resp.organizations)
    }

    /// Get the members of one organization with their titles.
    #[instrument(skip(self))]
    pub async fn users(&self, code: &str) -> Result<Vec<Value>> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("organization/users"))
            .query("code", code);
        let resp: GetOrganizationUsersResult = client.send_json(request).await?;
        Ok(resp.user_titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybozu_client::{ConnectionConfig, CybozuClient};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> UserApi {
        let config = ConnectionConfig::builder()
            .domain("cybozu.com")
            .subdomain("test")
            .login("test@example.com")
            .password("password")
            .build()
            .unwrap();
        let client = CybozuClient::new(config).unwrap().with_base_url(server.uri());
        UserApi::new(client)
    }

    #[tokio::test]
    async fn test_get_organizations() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/organizations.json"))
            .and(query_param("ids[0]", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organizations": [{"id": "3", "code": "sales", "name": "Sales"}]
            })))
            .mount(&server)
            .await;

        let orgs = api(&server)
            .organizations()
            .get(Some(&[3]), None)
            .await
            .unwrap();
        assert_eq!(orgs[0]["code"], "sales");
    }

    #[tokio::test]
    async fn test_organization_members() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/organization/users.json"))
            .and(query_param("code", "sales"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userTitles": [{"user": {"code": "user1"}, "title": {"code": "manager"}}]
            })))
            .mount(&server)
            .await;

        let members = api(&server).organizations().users("sales").await.unwrap();
        assert_eq!(members[0]["user"]["code"], "user1");
    }
}
