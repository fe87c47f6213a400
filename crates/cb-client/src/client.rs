//! HTTP request client for the Cybozu/Kintone APIs.
//!
//! `CybozuClient` holds a validated [`ConnectionConfig`] together with the
//! header/transport options derived from it, and issues authenticated
//! requests against `https://{subdomain}.{domain}`. No retries: every
//! failure propagates to the caller as-is.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::auth::AuthHeaders;
use crate::config::{AuthOptions, ConnectionConfig, HttpConfig};
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;

/// Path probed by [`CybozuClient::connection_test`].
pub const CONNECTION_TEST_PATH: &str = "/cb/version/";

/// Authenticated HTTP client for a single Cybozu/Kintone tenant.
///
/// Default headers are recomputed atomically by
/// [`change_auth_options`](CybozuClient::change_auth_options); the method
/// takes `&mut self`, so concurrent mutation is ruled out by the borrow
/// checker and shared use across tasks needs external serialization.
#[derive(Clone)]
pub struct CybozuClient {
    http: reqwest::Client,
    config: ConnectionConfig,
    http_config: HttpConfig,
    auth: AuthHeaders,
    base_url: String,
}

impl std::fmt::Debug for CybozuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CybozuClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CybozuClient {
    /// Create a client from a validated connection configuration.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        Self::with_http_config(config, HttpConfig::default())
    }

    /// Create a client with custom transport configuration.
    pub fn with_http_config(config: ConnectionConfig, http_config: HttpConfig) -> Result<Self> {
        let auth = AuthHeaders::from_config(&config);
        let http = Self::build_http(&auth, &http_config)?;
        let base_url = config.base_url();
        Ok(Self {
            http,
            config,
            http_config,
            auth,
            base_url,
        })
    }

    /// Point the client at a different base URL (test servers, reverse
    /// proxies). Auth derivation is unaffected.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the connection configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Get the derived default auth headers.
    pub fn auth_headers(&self) -> &AuthHeaders {
        &self.auth
    }

    /// Get the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path. Full URLs pass through unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Replace auth options with a partial overlay.
    ///
    /// The merged configuration is re-validated and the complete new header
    /// set (and transport, for certificate changes) is built before any
    /// state is swapped; on error the client is left exactly as it was.
    pub fn change_auth_options(&mut self, options: AuthOptions) -> Result<()> {
        let config = self.config.merged(&options)?;
        let auth = AuthHeaders::from_config(&config);
        let http = Self::build_http(&auth, &self.http_config)?;

        self.config = config;
        self.auth = auth;
        self.http = http;
        Ok(())
    }

    /// Create a GET request builder.
    pub fn get(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, path)
    }

    /// Create a POST request builder.
    pub fn post(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, path)
    }

    /// Create a PUT request builder.
    pub fn put(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, path)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, path)
    }

    /// Execute a request and classify the response.
    #[instrument(skip(self, request), fields(method = ?request.method, path = %request.path))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let url = self.url(&request.path);
        let mut req = self.http.request(request.method.to_reqwest(), &url);

        // Default headers first, then per-call values override key-by-key.
        // Names are lowercased so the override is spelling-insensitive.
        let mut headers: HashMap<String, String> = self
            .auth
            .header_pairs()
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        for (name, value) in request.headers {
            headers.insert(name.to_ascii_lowercase(), value);
        }
        for (name, value) in &headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.json(&value),
                RequestBody::Text(text) => req.body(text),
                RequestBody::Bytes(bytes) => req.body(bytes),
                RequestBody::Form(data) => req.form(&data),
                RequestBody::Multipart(part) => {
                    let file_part = reqwest::multipart::Part::bytes(part.content.to_vec())
                        .file_name(part.file_name)
                        .mime_str(&part.content_type)
                        .map_err(|e| Error::with_source(ErrorKind::Other(e.to_string()), e))?;
                    req.multipart(reqwest::multipart::Form::new().part(part.field, file_part))
                }
            };
        }

        if self.http_config.enable_tracing || self.config.debug() {
            debug!(url = %url, "Sending request");
        }

        let response = req.send().await?;

        if self.http_config.enable_tracing || self.config.debug() {
            let status = response.status().as_u16();
            if response.status().is_success() {
                debug!(status, "Response received");
            } else {
                info!(status, "Non-success response");
            }
        }

        Response::new(response).check_cybozu_error().await
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }

    /// Issue a minimal authenticated request to verify credentials.
    ///
    /// Succeeds on any 2xx response; HTTP 401/403 surfaces as `FailedAuth`
    /// and everything else propagates as the corresponding request error.
    pub async fn connection_test(&self) -> Result<()> {
        self.execute(self.get(CONNECTION_TEST_PATH)).await?;
        Ok(())
    }

    fn build_http(auth: &AuthHeaders, http_config: &HttpConfig) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .timeout(http_config.timeout)
            .connect_timeout(http_config.connect_timeout)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .user_agent(&http_config.user_agent)
            .gzip(true)
            .deflate(true);

        if let Some(identity) = auth.identity() {
            // Scoped read: the certificate file handle is released before
            // the client is built, on success and failure alike.
            let der = std::fs::read(&identity.file).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!(
                        "Cannot read cert_file {}: {}",
                        identity.file.display(),
                        e
                    )),
                    e,
                )
            })?;
            let id = reqwest::Identity::from_pkcs12_der(&der, &identity.password)
                .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;
            builder = builder.identity(id);
        }

        builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))
    }
}
