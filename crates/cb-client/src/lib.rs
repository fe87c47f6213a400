//! # cybozu-client
//!
//! Core HTTP client infrastructure for the Cybozu/Kintone REST APIs.
//!
//! This crate provides:
//! - A typed, validated connection configuration (domain, subdomain, and
//!   the password / API-token / basic-auth / client-certificate options)
//! - Deterministic derivation of the vendor auth headers
//!   (`X-Cybozu-Authorization` XOR `X-Cybozu-API-Token`, optional
//!   `Authorization: Basic`, optional TLS client certificate)
//! - A thin request client that merges per-call options over the defaults
//!   and classifies responses (401/403 → `FailedAuth`, structured Cybozu
//!   error bodies → `CybozuApi`)
//! - A credential-verification `connection_test`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │             (cybozu-kintone, cybozu-user)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CybozuClient                            │
//! │  - Holds ConnectionConfig + derived AuthHeaders             │
//! │  - Base URL https://{subdomain}.{domain}                    │
//! │  - get/post/put/delete builders, send_json, connection_test │
//! │  - change_auth_options: atomic header-set replacement       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use cybozu_client::{ConnectionConfig, CybozuClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cybozu_client::Error> {
//!     let config = ConnectionConfig::builder()
//!         .domain("cybozu.com")
//!         .subdomain("example")
//!         .login("user@example.com")
//!         .password("password")
//!         .build()?;
//!
//!     let client = CybozuClient::new(config)?;
//!     client.connection_test().await?;
//!
//!     let records: serde_json::Value = client
//!         .send_json(client.get("/k/v1/records.json").query("app", "7"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
pub mod logging;
mod request;
mod response;

pub use auth::{
    AuthHeaders, ClientIdentity, HEADER_AUTHORIZATION, HEADER_CYBOZU_API_TOKEN,
    HEADER_CYBOZU_AUTHORIZATION,
};
pub use client::{CybozuClient, CONNECTION_TEST_PATH};
pub use config::{
    AuthOptions, ConnectionConfig, ConnectionConfigBuilder, HttpConfig, HttpConfigBuilder,
};
pub use error::{Error, ErrorKind, Result};
pub use request::{MultipartFile, RequestBody, RequestBuilder, RequestMethod};
pub use response::Response;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("cybozu-api/", env!("CARGO_PKG_VERSION"));
