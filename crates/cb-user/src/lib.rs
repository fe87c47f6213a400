//! Cybozu User API client.
//!
//! Builds on [`cybozu_client`] for transport and authentication, and covers
//! the tenant directory:
//!
//! - [`Users`], [`Organizations`], [`Titles`]: directory listings
//! - [`UserOrganizations`]: per-user organization/title assignments
//! - [`Csv`]: bulk import/export of any directory resource as CSV
//!
//! Endpoint paths follow `/v1/{resource}.json`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cybozu_client::{ConnectionConfig, CybozuClient};
//! use cybozu_user::{CsvKind, UserApi};
//!
//! let config = ConnectionConfig::builder()
//!     .domain("cybozu.com")
//!     .subdomain("example")
//!     .login("admin@example.com")
//!     .password("password")
//!     .build()?;
//! let api = UserApi::new(CybozuClient::new(config)?);
//!
//! let export = api.csv().get(CsvKind::User).await?;
//! let task = api.csv().post(CsvKind::User, "users.csv").await?;
//! let status = api.csv().result(&task).await?;
//! ```

pub mod api;
pub mod csv;
pub mod error;
pub mod organizations;
pub mod titles;
pub mod types;
pub mod user_organizations;
pub mod users;

pub use api::UserApi;
pub use csv::Csv;
pub use error::{Error, ErrorKind, Result};
pub use organizations::Organizations;
pub use titles::Titles;
pub use types::{CsvImportResult, CsvKind, CsvTaskStatus};
pub use user_organizations::UserOrganizations;
pub use users::Users;
