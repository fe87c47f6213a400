//! Space operations (`/k/v1/space.json`, `template/space.json`).

use serde_json::{json, Value};
use tracing::instrument;

use crate::api::KintoneApi;
use crate::error::Result;
use crate::types::PostSpaceResult;

/// Space operations.
#[derive(Debug)]
pub struct Space<'a> {
    api: &'a KintoneApi,
}

impl<'a> Space<'a> {
    pub(crate) fn new(api: &'a KintoneApi) -> Self {
        Self { api }
    }

    /// Get one space.
    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Result<Value> {
        let client = self.api.client();
        let request = client
            .get(self.api.api_path("space"))
            .query("id", id.to_string());
        client.send_json(request).await.map_err(Into::into)
    }

    /// Create a space from a template; returns the new space id.
    #[instrument(skip(self, members))]
    pub async fn post(
        &self,
        template_id: u64,
        name: &str,
        members: &[Value],
        is_guest: bool,
    ) -> Result<PostSpaceResult> {
        let mut body = json!({
            "id": template_id,
            "name": name,
            "members": members,
        });
        if is_guest {
            body["isGuest"] = json!(true);
        }
        let client = self.api.client();
        let request = client
            .post(self.api.api_path("template/space"))
            .json_value(body);
        client.send_json(request).await.map_err(Into::into)
    }

    /// Delete a space.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<()> {
        let client = self.api.client();
        let request = client
            .delete(self.api.api_path("space"))
            .json_value(json!({ "id": id }));
        client.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybozu_client::{ConnectionConfig, CybozuClient};
    use wiremock::matchers::{body_partial_json, method, path, query_param};
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
    async fn test_space_lifecycle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/k/v1/template/space.json"))
            .and(body_partial_json(serde_json::json!({
                "id": 1, "name": "test space"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "42"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/k/v1/space.json"))
            .and(query_param("id", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "42", "defaultThread": "3"
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/k/v1/space.json"))
            .and(body_partial_json(serde_json::json!({"id": 42})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let api = api(&server);
        let members = vec![serde_json::json!({
            "entity": {"type": "USER", "code": "test@example.com"},
            "isAdmin": true
        })];
        let created = api.space().post(1, "test space", &members, false).await.unwrap();
        assert_eq!(created.id, "42");

        let space = api.space().get(42).await.unwrap();
        assert_eq!(space["defaultThread"], "3");

        api.space().delete(42).await.unwrap();
    }

    #[tokio::test]
    async fn test_guest_space_created_in_guest_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/k/guest/9/v1/space.json"))
            .and(query_param("id", "9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "9"
            })))
            .mount(&server)
            .await;

        let space = api(&server).guest(9).space().get(9).await.unwrap();
        assert_eq!(space["id"], "9");
    }
}
