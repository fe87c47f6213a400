//! Kintone API entry point and path building.

use cybozu_client::CybozuClient;

use crate::app::App;
use crate::file::File;
use crate::record::Record;
use crate::records::Records;
use crate::space::Space;

/// Kintone application API client.
///
/// Wraps a [`CybozuClient`] and exposes one sub-API per REST resource
/// family. Endpoint paths follow `/k/v1/{resource}.json`, or the guest
/// variant `/k/guest/{id}/v1/{resource}.json` for a client obtained via
/// [`KintoneApi::guest`].
///
/// # Example
///
/// ```rust,ignore
/// use cybozu_client::{ConnectionConfig, CybozuClient};
/// use cybozu_kintone::KintoneApi;
///
/// let config = ConnectionConfig::builder()
///     .domain("cybozu.com")
///     .subdomain("example")
///     .login("user@example.com")
///     .password("password")
///     .build()?;
/// let api = KintoneApi::new(CybozuClient::new(config)?);
///
/// let resp = api.records().get(7, "", None, true).await?;
/// let in_guest = api.guest(11).records().get(8, "", None, false).await?;
/// ```
#[derive(Debug, Clone)]
pub struct KintoneApi {
    client: CybozuClient,
    guest_space_id: Option<u64>,
}

impl KintoneApi {
    /// Create a Kintone API client.
    pub fn new(client: CybozuClient) -> Self {
        Self {
            client,
            guest_space_id: None,
        }
    }

    /// A view of the same tenant scoped to a guest space: identical
    /// operations against the guest-space path variant.
    pub fn guest(&self, guest_space_id: u64) -> Self {
        Self {
            client: self.client.clone(),
            guest_space_id: Some(guest_space_id),
        }
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &CybozuClient {
        &self.client
    }

    /// The guest space id this view is scoped to, if any.
    pub fn guest_space_id(&self) -> Option<u64> {
        self.guest_space_id
    }

    /// Build the endpoint path for a resource.
    pub fn api_path(&self, resource: &str) -> String {
        match self.guest_space_id {
            Some(id) => format!("/k/guest/{}/v1/{}.json", id, resource),
            None => format!("/k/v1/{}.json", resource),
        }
    }

    /// Single-record operations.
    pub fn record(&self) -> Record<'_> {
        Record::new(self)
    }

    /// Batch record operations.
    pub fn records(&self) -> Records<'_> {
        Records::new(self)
    }

    /// App metadata operations.
    pub fn app(&self) -> App<'_> {
        App::new(self)
    }

    /// Space operations.
    pub fn space(&self) -> Space<'_> {
        Space::new(self)
    }

    /// File upload/download.
    pub fn file(&self) -> File<'_> {
        File::new(self)
    }
}
