//! User API entry point and path building.

use cybozu_client::CybozuClient;

use crate::csv::Csv;
use crate::organizations::Organizations;
use crate::titles::Titles;
use crate::user_organizations::UserOrganizations;
use crate::users::Users;

/// Cybozu User API client.
///
/// Wraps a [`CybozuClient`] and exposes one sub-API per directory resource.
/// Endpoint paths follow `/v1/{resource}.json`.
///
/// # Example
///
/// ```rust,ignore
/// use cybozu_client::{ConnectionConfig, CybozuClient};
/// use cybozu_user::UserApi;
///
/// let config = ConnectionConfig::builder()
///     .domain("cybozu.com")
///     .subdomain("example")
///     .login("admin@example.com")
///     .password("password")
///     .build()?;
/// let api = UserApi::new(CybozuClient::new(config)?);
///
/// let users = api.users().get(None, Some(&["user1"])).await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserApi {
    client: CybozuClient,
}

impl UserApi {
    /// Create a User API client.
    pub fn new(client: CybozuClient) -> Self {
        Self { client }
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &CybozuClient {
        &self.client
    }

    /// Build the endpoint path for a resource.
    pub fn api_path(&self, resource: &str) -> String {
        format!("/v1/{}.json", resource)
    }

    /// User listing.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Organization listing and membership.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(self)
    }

    /// Title listing.
    pub fn titles(&self) -> Titles<'_> {
        Titles::new(self)
    }

    /// Per-user organization/title assignments.
    pub fn user_organizations(&self) -> UserOrganizations<'_> {
        UserOrganizations::new(self)
    }

    /// CSV import/export transport.
    pub fn csv(&self) -> Csv<'_> {
        Csv::new(self)
    }
}
