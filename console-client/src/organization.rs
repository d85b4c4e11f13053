//! Organization service client.
//!
//! Translates organization operations into single transport calls against
//! the organization service. The service keeps no state, never retries and
//! never catches errors: every [`ApiError`] from the transport reaches the
//! caller unchanged.

use async_trait::async_trait;
use console_org::{Organization, OrganizationCreateRequest, OrganizationUpdateRequest};
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::endpoints::organizations;
use crate::error::ApiResult;

/// Organization operations.
///
/// Deletes are logical on the server: both delete operations return the
/// entities with status `D` rather than nothing.
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    /// Fetch one organization by uuid.
    async fn get_by_uuid(&self, uuid: &str) -> ApiResult<Organization>;

    /// Fetch the tenants of a parent organization.
    async fn get_tenants(&self, parent_uuid: &str) -> ApiResult<Vec<Organization>>;

    /// Create an organization under `parent_uuid`, or under the configured
    /// default parent when `None`.
    async fn create(
        &self,
        data: &OrganizationCreateRequest,
        parent_uuid: Option<&str>,
    ) -> ApiResult<Organization>;

    /// Replace an organization.
    async fn update(&self, uuid: &str, data: &OrganizationUpdateRequest) -> ApiResult<Organization>;

    /// Logically delete one organization.
    async fn delete(&self, uuid: &str) -> ApiResult<Organization>;

    /// Logically delete several organizations in one call.
    async fn bulk_delete(&self, uuids: &[String]) -> ApiResult<Vec<Organization>>;
}

/// HTTP implementation of [`OrganizationApi`].
#[derive(Debug, Clone)]
pub struct OrganizationService {
    /// Transport.
    client: ApiClient,

    /// Parent used by `create` when none is given.
    default_parent_uuid: String,
}

impl OrganizationService {
    /// Create a service over an existing client.
    pub fn new(client: ApiClient, default_parent_uuid: impl Into<String>) -> Self {
        Self {
            client,
            default_parent_uuid: default_parent_uuid.into(),
        }
    }

    /// Build the client and service from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = ApiClient::new(config.clone())?;
        Ok(Self::new(client, config.parent_org_uuid.clone()))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn default_parent_uuid(&self) -> &str {
        &self.default_parent_uuid
    }
}

#[async_trait]
impl OrganizationApi for OrganizationService {
    #[instrument(skip(self))]
    async fn get_by_uuid(&self, uuid: &str) -> ApiResult<Organization> {
        let endpoint = organizations::by_uuid(uuid);
        debug!(endpoint = %endpoint, "Fetching organization");

        let response = self.client.get(&endpoint, None).await?;
        Ok(response.data)
    }

    #[instrument(skip(self))]
    async fn get_tenants(&self, parent_uuid: &str) -> ApiResult<Vec<Organization>> {
        let endpoint = organizations::tenants(parent_uuid);
        debug!(endpoint = %endpoint, "Fetching tenant organizations");

        let response = self.client.get::<Vec<Organization>>(&endpoint, None).await?;
        debug!(count = response.data.len(), "Tenant organizations received");
        Ok(response.data)
    }

    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(
        &self,
        data: &OrganizationCreateRequest,
        parent_uuid: Option<&str>,
    ) -> ApiResult<Organization> {
        let parent = parent_uuid.unwrap_or(&self.default_parent_uuid);
        let endpoint = organizations::create(parent);
        debug!(endpoint = %endpoint, parent_uuid = %parent, "Creating organization");

        let response = self.client.post(&endpoint, Some(data), None).await?;
        Ok(response.data)
    }

    #[instrument(skip(self, data))]
    async fn update(&self, uuid: &str, data: &OrganizationUpdateRequest) -> ApiResult<Organization> {
        let endpoint = organizations::update(uuid);
        debug!(endpoint = %endpoint, "Updating organization");

        let response = self.client.put(&endpoint, Some(data), None).await?;
        Ok(response.data)
    }

    #[instrument(skip(self))]
    async fn delete(&self, uuid: &str) -> ApiResult<Organization> {
        let endpoint = organizations::delete(uuid);
        debug!(endpoint = %endpoint, "Deleting organization");

        let response = self
            .client
            .delete::<Organization, ()>(&endpoint, None, None)
            .await?;
        Ok(response.data)
    }

    #[instrument(skip(self), fields(count = uuids.len()))]
    async fn bulk_delete(&self, uuids: &[String]) -> ApiResult<Vec<Organization>> {
        let endpoint = organizations::bulk_delete();
        debug!(endpoint = %endpoint, uuids = ?uuids, "Bulk deleting organizations");

        let response = self.client.delete(&endpoint, Some(uuids), None).await?;
        Ok(response.data)
    }
}
