//! Organization domain model
//!
//! This module provides the Organization entity as returned by the
//! organization service. Organizations are identified by a server-assigned
//! numeric `id` and a stable external `uuid`; tenants are organizations
//! scoped under a parent organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::OrgStatus;

/// An organization as stored by the organization service.
///
/// Contact, capacity and location fields are all nullable. The audit
/// timestamps are epoch milliseconds.
///
/// # Examples
///
/// ```
/// use console_org::{Organization, OrgStatus};
///
/// let json = r#"{"id": 7, "uuid": "abc", "name": "Acme", "description": "d", "status": "A"}"#;
/// let org: Organization = serde_json::from_str(json).unwrap();
/// assert_eq!(org.uuid, "abc");
/// assert_eq!(org.status, OrgStatus::Active);
/// assert!(org.email_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Server-assigned numeric identifier
    pub id: i64,

    /// Stable external identifier
    pub uuid: String,

    /// Parent/reference organization link
    #[serde(default)]
    pub org_ref_id: Option<i64>,

    /// Organization type
    #[serde(default)]
    pub org_type_id: Option<i64>,

    /// Address type
    #[serde(default)]
    pub address_type_id: Option<i64>,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

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

    /// Contact email address
    #[serde(default)]
    pub email_id: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    /// Current number of users
    #[serde(default)]
    pub number_of_user: Option<i64>,

    /// Concurrent user limit
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

    /// Free-text state when `state_id` is not applicable
    #[serde(default)]
    pub state_other: Option<String>,

    #[serde(default)]
    pub zip_code: Option<String>,

    /// Lifecycle status
    pub status: OrgStatus,

    /// User who created the organization
    #[serde(default)]
    pub created_by: Option<i64>,

    /// User who last updated the organization
    #[serde(default)]
    pub updated_by: Option<i64>,

    /// Creation time (epoch milliseconds)
    #[serde(default)]
    pub created_on: Option<i64>,

    /// Last update time (epoch milliseconds)
    #[serde(default)]
    pub updated_on: Option<i64>,
}

impl Organization {
    /// Check if the organization is active.
    pub fn is_active(&self) -> bool {
        self.status == OrgStatus::Active
    }

    /// Check if the organization has been logically deleted.
    pub fn is_deleted(&self) -> bool {
        self.status == OrgStatus::Deleted
    }

    /// Creation time as a UTC timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_on.and_then(DateTime::from_timestamp_millis)
    }

    /// Last update time as a UTC timestamp.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_on.and_then(DateTime::from_timestamp_millis)
    }

    /// Remaining user capacity, if both counts are known.
    ///
    /// Never negative; an organization over its limit reports zero.
    pub fn remaining_capacity(&self) -> Option<i64> {
        match (self.max_concurrent_user, self.number_of_user) {
            (Some(max), Some(current)) => Some((max - current).max(0)),
            _ => None,
        }
    }
}
