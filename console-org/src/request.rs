//! Create and update request bodies
//!
//! Request shapes mirror [`Organization`] minus the server-assigned fields.
//! Required fields (`name`, `description`, `orgTypeId`, `addressTypeId`) are
//! enforced by the caller: the service sends whatever it is given. Callers
//! that want the form-level checks can run [`OrganizationCreateRequest::validate`]
//! before submitting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::organization::Organization;
use crate::status::OrgStatus;

/// Body for creating an organization under a parent.
///
/// Optional fields left as `None` are omitted from the JSON body.
///
/// # Examples
///
/// ```
/// use console_org::OrganizationCreateRequest;
///
/// let request = OrganizationCreateRequest::new("Acme", "Widgets", 1, 1)
///     .with_email("ops@acme.test")
///     .with_max_concurrent_user(25);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCreateRequest {
    pub name: String,
    pub description: String,
    pub org_type_id: i64,
    pub address_type_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_ref_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_user: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_user: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_other: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrgStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<i64>,
}

impl OrganizationCreateRequest {
    /// Creates a request carrying only the required fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        org_type_id: i64,
        address_type_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            org_type_id,
            address_type_id,
            org_ref_id: None,
            phone_number_primary: None,
            phone_number_secondary: None,
            fax_number: None,
            mobile_number_primary: None,
            mobile_number_secondary: None,
            email_id: None,
            website: None,
            number_of_user: None,
            max_concurrent_user: None,
            street: None,
            city: None,
            country_id: None,
            state_id: None,
            state_other: None,
            zip_code: None,
            status: None,
            created_by: None,
            updated_by: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email_id = Some(email.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_org_ref_id(mut self, org_ref_id: i64) -> Self {
        self.org_ref_id = Some(org_ref_id);
        self
    }

    pub fn with_max_concurrent_user(mut self, max: i64) -> Self {
        self.max_concurrent_user = Some(max);
        self
    }

    pub fn with_status(mut self, status: OrgStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_created_by(mut self, user_id: i64) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Run the form-level checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.name,
            self.email_id.as_deref(),
            self.max_concurrent_user,
        )
    }
}

/// Body for a full replacement of an organization.
///
/// Nullable fields are sent as `null` when `None` so the server clears them.
/// `status`, `orgRefId` and the audit user ids are omitted when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUpdateRequest {
    pub name: String,
    pub description: String,
    pub org_type_id: i64,
    pub address_type_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_ref_id: Option<i64>,
    #[serde(default)]
    pub phone_number_primary: Option<String>,
    #[serde(default)]
    pub phone_number_secondary: Option<String>,
    #[serde(default)]
    pub fax_number: Option<String>,
    #[serde(default)]
    pub mobile_number_primary: Option<String>,
    #[serde(default)]
    pub mobile_number_secondary: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub number_of_user: Option<i64>,
    #[serde(default)]
    pub max_concurrent_user: Option<i64>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_id: Option<i64>,
    #[serde(default)]
    pub state_id: Option<i64>,
    #[serde(default)]
    pub state_other: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrgStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<i64>,
}

impl OrganizationUpdateRequest {
    /// Run the form-level checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.name,
            self.email_id.as_deref(),
            self.max_concurrent_user,
        )
    }

    pub fn with_status(mut self, status: OrgStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_updated_by(mut self, user_id: i64) -> Self {
        self.updated_by = Some(user_id);
        self
    }
}

impl From<&Organization> for OrganizationUpdateRequest {
    /// Copies every replaceable field of an existing organization.
    ///
    /// Type ids default to `1` when the server did not return them.
    fn from(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            description: org.description.clone(),
            org_type_id: org.org_type_id.unwrap_or(DEFAULT_TYPE_ID),
            address_type_id: org.address_type_id.unwrap_or(DEFAULT_TYPE_ID),
            org_ref_id: org.org_ref_id,
            phone_number_primary: org.phone_number_primary.clone(),
            phone_number_secondary: org.phone_number_secondary.clone(),
            fax_number: org.fax_number.clone(),
            mobile_number_primary: org.mobile_number_primary.clone(),
            mobile_number_secondary: org.mobile_number_secondary.clone(),
            email_id: org.email_id.clone(),
            website: org.website.clone(),
            number_of_user: org.number_of_user,
            max_concurrent_user: org.max_concurrent_user,
            street: org.street.clone(),
            city: org.city.clone(),
            country_id: org.country_id,
            state_id: org.state_id,
            state_other: org.state_other.clone(),
            zip_code: org.zip_code.clone(),
            status: Some(org.status),
            created_by: org.created_by,
            updated_by: org.updated_by,
        }
    }
}

const DEFAULT_TYPE_ID: i64 = 1;

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: &'static str,
}

/// Request failed the form-level checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid organization request: {}", field_list(.fields))]
pub struct ValidationError {
    /// Every failing field, in declaration order.
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Look up the message for a field.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message)
    }
}

fn field_list(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} ({})", f.field, f.message))
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_fields(
    name: &str,
    email: Option<&str>,
    max_concurrent_user: Option<i64>,
) -> Result<(), ValidationError> {
    let mut fields = Vec::new();

    if name.trim().is_empty() {
        fields.push(FieldError {
            field: "name",
            message: "Name is required",
        });
    }

    if let Some(email) = email {
        if !looks_like_email(email) {
            fields.push(FieldError {
                field: "emailId",
                message: "Please enter a valid email address",
            });
        }
    }

    if matches!(max_concurrent_user, Some(max) if max <= 0) {
        fields.push(FieldError {
            field: "maxConcurrentUser",
            message: "Maximum concurrent users must be greater than 0",
        });
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = OrganizationCreateRequest::new("Acme", "d", 1, 1);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Acme",
                "description": "d",
                "orgTypeId": 1,
                "addressTypeId": 1
            })
        );
    }

    #[test]
    fn test_update_request_sends_nulls() {
        let org: Organization = serde_json::from_value(serde_json::json!({
            "id": 1,
            "uuid": "abc",
            "name": "Acme",
            "description": "d",
            "status": "A"
        }))
        .unwrap();

        let request = OrganizationUpdateRequest::from(&org).with_status(OrgStatus::Inactive);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["status"], "I");
        assert_eq!(value["orgTypeId"], 1);
        assert!(value["emailId"].is_null());
        assert!(value.get("emailId").is_some());
        assert!(value.get("createdBy").is_none());
    }

    #[test]
    fn test_validate_reports_every_field() {
        let request = OrganizationCreateRequest::new("  ", "d", 1, 1)
            .with_email("not-an-email")
            .with_max_concurrent_user(0);

        let err = request.validate().unwrap_err();
        assert_eq!(err.fields.len(), 3);
        assert_eq!(err.message_for("name"), Some("Name is required"));
        assert!(err.message_for("emailId").is_some());
        assert!(err.message_for("maxConcurrentUser").is_some());
        assert!(err.to_string().starts_with("Invalid organization request: name"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.io"));
        assert!(!looks_like_email("a@.io"));
    }
}
