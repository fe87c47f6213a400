//! Kintone REST API client for Cybozu tenants.
//!
//! Builds on [`cybozu_client`] for transport and authentication, and
//! exposes one sub-API per Kintone resource family:
//!
//! - [`Record`] / [`Records`]: single and batch record operations
//! - [`App`]: app metadata and form fields
//! - [`Space`]: space lifecycle
//! - [`File`]: attachment upload and download
//!
//! Batch operations are capped at [`MAX_BATCH_SIZE`] items per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use cybozu_client::{ConnectionConfig, CybozuClient};
//! use cybozu_kintone::KintoneApi;
//!
//! let config = ConnectionConfig::builder()
//!     .domain("cybozu.com")
//!     .subdomain("example")
//!     .use_api_token(true)
//!     .token("api-token")
//!     .build()?;
//! let api = KintoneApi::new(CybozuClient::new(config)?);
//!
//! let result = api.records().get(7, "limit 10", None, true).await?;
//! println!("{} records", result.records.len());
//! ```

pub mod api;
pub mod app;
pub mod error;
pub mod file;
pub mod record;
pub mod records;
pub mod space;
pub mod types;

pub use api::KintoneApi;
pub use app::App;
pub use error::{Error, ErrorKind, Result};
pub use file::File;
pub use record::Record;
pub use records::{Records, MAX_BATCH_SIZE};
pub use space::Space;
pub use types::{
    FileUploadResult, GetRecordsResult, PostRecordResult, PostRecordsResult, PostSpaceResult,
    PutRecordResult, PutRecordsResult, RecordRevision, RecordUpdate, StatusAction,
};
