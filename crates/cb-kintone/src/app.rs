//! App metadata operations (`/k/v1/app.json`, `apps.json`, form fields).

use serde_json::Value;
use tracing::instrument;

use crate::api::KintoneApi;
use crate::error::Result;

/// Response envelope of `GET /k/v1/apps.json`.
#[derive(Debug, serde::Deserialize)]
struct GetAppsResult {
    apps: Vec<Value>,
}

/// App metadata operations.
#[derive(Debug)]
pub struct App<'a> {
    api: &'a KintoneApi,
}

impl<'a> App<'a> {
    pub(crate) fn new(api: &'a KintoneApi) -> Self {
        Self { api }
    }

    /// Get the metadata of one app.
    #[instrument(skip(self))]
    pub async fn get(&self, app: u64) -> Result<Value> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("app"))
            .query("id", app.to_string());
        client.send_json(request).await.map_err(Into::into)
    }

    /// List apps, optionally filtered by id, code or name. `limit`/`offset`
    /// are passed through verbatim.
    #[instrument(skip(self, ids, codes))]
    pub async fn list(
        &self,
        ids: Option<&[u64]>,
        codes: Option<&[&str]>,
        name: Option<&str>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<Value>> {
        let client = self.api.client();
        let mut request = client.get(self.api.api_path("apps"));
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
        if let Some(name) = name {
            request = request.query("name", name);
        }
        if let Some(limit) = limit {
            request = request.query("limit", limit.to_string());
        }
        if let Some(offset) = offset {
            request = request.query("offset", offset.to_string());
        }
        let resp: GetAppsResult = client.send_json(request).await?;
        Ok(resp.apps)
    }

    /// Get the form field definitions of an app.
    #[instrument(skip(self))]
    pub async fn form_fields(&self, app: u64) -> Result<Value> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("app/form/fields"))
            .query("app", app.to_string());
        client.send_json(request).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybozu_client::{ConnectionConfig, CybozuClient};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> KintoneApi {
        let config = ConnectionConfig::builder()
            .domain("cybozu.com")
            .subdomain("test")
            .login("test@example.com")
            .password("password")
            .build()
            .unwrap();
        let client = CybozuClient::new(config).unwrap().with_base_url(server.uri());
        KintoneApi::new(client)
    }

    #[tokio::test]
    async fn test_get_app() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/k/v1/app.json"))
            .and(query_param("id", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "appId": "7", "name": "test app"
            })))
            .mount(&server)
            .await;

        let app = api(&server).app().get(7).await.unwrap();
        assert_eq!(app["name"], "test app");
    }

    #[tokio::test]
    async fn test_list_apps_passes_pagination_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/k/v1/apps.json"))
            .and(query_param("ids[0]", "7"))
            .and(query_param("name", "crm"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "apps": [{"appId": "7"}]
            })))
            .mount(&server)
            .await;

        let apps = api(&server)
            .app()
            .list(Some(&[7]), None, Some("crm"), Some(10), Some(20))
            .await
            .unwrap();
        assert_eq!(apps.len(), 1);
    }

    #[tokio::test]
    async fn test_form_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/k/v1/app/form/fields.json"))
            .and(query_param("app", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {"single_text": {"type": "SINGLE_LINE_TEXT"}}
            })))
            .mount(&server)
            .await;

        let fields = api(&server).app().form_fields(7).await.unwrap();
        assert_eq!(fields["properties"]["single_text"]["type"], "SINGLE_LINE_TEXT");
    }
}
