//! # cybozu-api
//!
//! A Cybozu/Kintone REST API client library for Rust.
//!
//! This library provides access to the Kintone application API and the
//! Cybozu User API over a shared HTTP client with Cybozu header-based
//! authentication.
//!
//! ## Security
//!
//! - Sensitive data (passwords, API tokens, certificate passwords) are
//!   redacted in Debug output
//! - Tracing/logging skips credential parameters
//!
//! ## Crates
//!
//! - **cybozu-client** - Core HTTP client: connection config, auth headers,
//!   request/response handling, connection test
//! - **cybozu-kintone** - Kintone application API: records, apps, spaces,
//!   files, guest spaces
//! - **cybozu-user** - User API: users, organizations, titles, CSV
//!   import/export
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cybozu_api::{ConnectionConfig, CybozuClient, KintoneApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectionConfig::builder()
//!         .domain("cybozu.com")
//!         .subdomain("example")
//!         .use_api_token(true)
//!         .token("api-token")
//!         .build()?;
//!
//!     let client = CybozuClient::new(config)?;
//!     client.connection_test().await?;
//!
//!     let api = KintoneApi::new(client);
//!     let result = api.records().get(7, "limit 10", None, true).await?;
//!
//!     for record in result.records {
//!         println!("{}", record["title"]["value"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use cybozu_client as client;
#[cfg(feature = "kintone")]
pub use cybozu_kintone as kintone;
#[cfg(feature = "user")]
pub use cybozu_user as user;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use cybozu_client::{AuthOptions, ConnectionConfig, CybozuClient};
#[cfg(feature = "kintone")]
pub use cybozu_kintone::KintoneApi;
#[cfg(feature = "user")]
pub use cybozu_user::UserApi;
