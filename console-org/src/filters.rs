//! Search, filtering and pagination over organization lists
//!
//! The organization service has no list-all or search endpoint; tenant
//! collections are fetched whole and paged locally.

use serde::{Deserialize, Serialize};

use crate::organization::Organization;
use crate::status::OrgStatus;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 10;

/// Filters applied to a cached organization collection.
///
/// Every `None` filter matches everything. Pages are 1-based.
///
/// # Examples
///
/// ```
/// use console_org::{OrganizationFilters, OrgStatus};
///
/// let filters = OrganizationFilters::default()
///     .with_status(OrgStatus::Active)
///     .with_search("acme")
///     .with_page(2, 5);
/// assert_eq!(filters.page(), 2);
/// assert_eq!(filters.limit(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrgStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i64>,

    /// Case-insensitive text matched against name, description, email and city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl OrganizationFilters {
    pub fn with_status(mut self, status: OrgStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Effective page number (at least 1).
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size; zero falls back to [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> usize {
        match self.limit {
            Some(0) | None => DEFAULT_LIMIT,
            Some(limit) => limit,
        }
    }

    /// Check a single organization against every filter except paging.
    pub fn matches(&self, org: &Organization) -> bool {
        if self.status.is_some_and(|status| org.status != status) {
            return false;
        }
        if self.org_type_id.is_some() && org.org_type_id != self.org_type_id {
            return false;
        }
        if self.country_id.is_some() && org.country_id != self.country_id {
            return false;
        }
        if self.state_id.is_some() && org.state_id != self.state_id {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                let contains = |s: &str| s.to_lowercase().contains(&term);
                contains(&org.name)
                    || contains(&org.description)
                    || org.email_id.as_deref().is_some_and(contains)
                    || org.city.as_deref().is_some_and(contains)
            }
        }
    }

    /// Filter and page a collection.
    ///
    /// `total` counts every match, not just the returned page. A page past the
    /// end yields an empty `organizations` list.
    pub fn apply(&self, organizations: &[Organization]) -> OrganizationListResponse {
        let page = self.page();
        let limit = self.limit();

        let matching: Vec<&Organization> =
            organizations.iter().filter(|org| self.matches(org)).collect();
        let total = matching.len();

        let organizations = matching
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .cloned()
            .collect();

        OrganizationListResponse {
            organizations,
            total,
            page,
            limit,
        }
    }
}

/// One page of organizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationListResponse {
    /// Organizations on this page
    pub organizations: Vec<Organization>,

    /// Matching organizations across all pages
    pub total: usize,

    /// 1-based page number
    pub page: usize,

    /// Page size
    pub limit: usize,
}

impl OrganizationListResponse {
    /// Number of pages needed for `total` items (zero when empty).
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
