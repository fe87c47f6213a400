//! HTTP response handling and Cybozu error classification.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Error body returned by the Cybozu/Kintone APIs.
#[derive(Debug, Deserialize)]
struct CybozuErrorBody {
    code: String,
    message: String,
    #[allow(dead_code)]
    id: Option<String>,
}

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.inner.json().await.map_err(Into::into)
    }

    /// Classify a non-success response into the error taxonomy.
    ///
    /// 401/403 become `FailedAuth`; other non-2xx responses carrying a
    /// Cybozu `{code, id, message}` body become `CybozuApi`; anything else
    /// passes through as a generic `Http` error with a body snippet.
    pub async fn check_cybozu_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        if status == 401 || status == 403 {
            return Err(Error::new(ErrorKind::FailedAuth { status }));
        }

        let body = self.text().await.unwrap_or_default();
        if let Ok(api_error) = serde_json::from_str::<CybozuErrorBody>(&body) {
            return Err(Error::new(ErrorKind::CybozuApi {
                code: api_error.code,
                message: api_error.message,
            }));
        }

        Err(Error::new(ErrorKind::Http {
            status,
            message: truncate_snippet(body, 256),
        }))
    }
}

/// Cut the body snippet at a char boundary; a byte-offset cut would split
/// multibyte characters (error pages are often localized).
fn truncate_snippet(mut body: String, max: usize) -> String {
    if body.len() > max {
        let mut end = max;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch(server: &MockServer, p: &str) -> Response {
        let resp = reqwest::get(format!("{}{}", server.uri(), p))
            .await
            .unwrap();
        Response::new(resp)
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "records": []
            })))
            .mount(&server)
            .await;

        let response = fetch(&server, "/ok").await.check_cybozu_error().await.unwrap();
        assert!(response.is_success());
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["records"].is_array());
    }

    #[tokio::test]
    async fn test_401_and_403_become_failed_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/unauthorized"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forbidden"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = fetch(&server, "/unauthorized")
            .await
            .check_cybozu_error()
            .await
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::FailedAuth { status: 401 }));

        let err = fetch(&server, "/forbidden")
            .await
            .check_cybozu_error()
            .await
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::FailedAuth { status: 403 }));
    }

    #[tokio::test]
    async fn test_cybozu_error_body_is_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bad-request"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": "CB_VA01",
                "id": "6GmQwzDXkPcEbBkMSJBs",
                "message": "Missing or invalid input."
            })))
            .mount(&server)
            .await;

        let err = fetch(&server, "/bad-request")
            .await
            .check_cybozu_error()
            .await
            .unwrap_err();
        match err.kind {
            ErrorKind::CybozuApi { code, message } => {
                assert_eq!(code, "CB_VA01");
                assert_eq!(message, "Missing or invalid input.");
            }
            other => panic!("expected CybozuApi error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unstructured_failure_is_generic_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oops"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = fetch(&server, "/oops")
            .await
            .check_cybozu_error()
            .await
            .unwrap_err();
        match err.kind {
            ErrorKind::Http { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("bad gateway"));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multibyte_body_snippet_cut_at_char_boundary() {
        let server = MockServer::start().await;
        // Multibyte text placed so the 256-byte cut lands mid-character.
        let body = format!("{}エラーが発生しました", "x".repeat(255));
        Mock::given(method("GET"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(502).set_body_string(body))
            .mount(&server)
            .await;

        let err = fetch(&server, "/gateway")
            .await
            .check_cybozu_error()
            .await
            .unwrap_err();
        match err.kind {
            ErrorKind::Http { status, message } => {
                assert_eq!(status, 502);
                assert!(message.len() <= 256);
                assert!(message.starts_with("xxx"));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncate_snippet_boundaries() {
        assert_eq!(truncate_snippet("short".to_string(), 256), "short");
        let cut = truncate_snippet("ありがとう".to_string(), 4);
        assert_eq!(cut, "あ");
    }
}
