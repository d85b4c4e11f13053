//! Endpoint templates for the organization service.
//!
//! Paths are relative to [`ORGANIZATION_SERVICE`], which is itself relative
//! to the configured base URL.

/// Path prefix of the organization service.
pub const ORGANIZATION_SERVICE: &str = "/organization-service";

/// Organization resource paths.
pub mod organizations {
    use super::ORGANIZATION_SERVICE;

    /// `GET /organizations/uuid/{uuid}`
    pub fn by_uuid(uuid: &str) -> String {
        format!("{}/organizations/uuid/{}", ORGANIZATION_SERVICE, uuid)
    }

    /// `GET /organizations/tenant/{parent_uuid}`
    pub fn tenants(parent_uuid: &str) -> String {
        format!("{}/organizations/tenant/{}", ORGANIZATION_SERVICE, parent_uuid)
    }

    /// `POST /organizations/{parent_uuid}`
    pub fn create(parent_uuid: &str) -> String {
        format!("{}/organizations/{}", ORGANIZATION_SERVICE, parent_uuid)
    }

    /// `PUT /organizations/{uuid}`
    pub fn update(uuid: &str) -> String {
        format!("{}/organizations/{}", ORGANIZATION_SERVICE, uuid)
    }

    /// `DELETE /organizations/{uuid}`
    pub fn delete(uuid: &str) -> String {
        format!("{}/organizations/{}", ORGANIZATION_SERVICE, uuid)
    }

    /// `DELETE /organizations/` with a JSON array of uuids as the body.
    pub fn bulk_delete() -> String {
        format!("{}/organizations/", ORGANIZATION_SERVICE)
    }
}
