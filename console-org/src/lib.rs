//! # Console Organization Model
//!
//! This crate provides the organization data model for the tenant console,
//! shared by the REST client and the organization store.
//!
//! ## Overview
//!
//! The console-org crate handles:
//! - **Organizations**: The tenant entity as returned by the organization service
//! - **Status**: The `A`/`I`/`D` lifecycle with logical deletion
//! - **Requests**: Create and full-replacement update bodies
//! - **Filters**: Client-side search and pagination over tenant collections
//!
//! ## Architecture
//!
//! ```text
//! Parent Organization (uuid)
//!   └─ Tenants (Organization, orgRefId → parent)
//!         ├─ Contact / Capacity / Location
//!         ├─ OrgStatus (A ⇄ I → D)
//!         └─ Audit (createdBy/On, updatedBy/On)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use console_org::{OrganizationCreateRequest, OrganizationFilters, OrgStatus};
//!
//! let request = OrganizationCreateRequest::new("Acme", "Widgets", 1, 1)
//!     .with_email("ops@acme.test");
//! request.validate().expect("valid request");
//!
//! let filters = OrganizationFilters::default()
//!     .with_status(OrgStatus::Active)
//!     .with_page(1, 5);
//! let page = filters.apply(&[]);
//! assert_eq!(page.total, 0);
//! ```

pub mod filters;
pub mod organization;
pub mod request;
pub mod status;

// Re-export main types for convenience
pub use filters::{OrganizationFilters, OrganizationListResponse, DEFAULT_LIMIT};
pub use organization::Organization;
pub use request::{
    FieldError, OrganizationCreateRequest, OrganizationUpdateRequest, ValidationError,
};
pub use status::{OrgStatus, StatusTransitionError};
