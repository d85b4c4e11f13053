//! Observable organization state.

use console_org::{Organization, DEFAULT_LIMIT};

use crate::error::StoreError;

/// Snapshot of one store's state.
///
/// `loading` is `true` exactly while `pending > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationState {
    /// Last fetched, created or updated organization
    pub organization: Option<Organization>,

    /// Cached collection (tenants, or a single fetched organization)
    pub organizations: Vec<Organization>,

    /// Whether any action is in flight
    pub loading: bool,

    /// Number of actions in flight
    pub(crate) pending: usize,

    /// Failure of the most recent action, cleared when the next one starts
    pub error: Option<StoreError>,

    /// Size of `organizations`
    pub total: usize,

    /// Current 1-based page
    pub page: usize,

    /// Page size
    pub limit: usize,
}

impl Default for OrganizationState {
    fn default() -> Self {
        Self {
            organization: None,
            organizations: Vec::new(),
            loading: false,
            pending: 0,
            error: None,
            total: 0,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl OrganizationState {
    /// Find a cached organization by uuid.
    ///
    /// The singular `organization` is checked before the collection.
    pub fn find(&self, uuid: &str) -> Option<&Organization> {
        self.organization
            .as_ref()
            .filter(|org| org.uuid == uuid)
            .or_else(|| self.organizations.iter().find(|org| org.uuid == uuid))
    }

    /// Number of actions currently in flight.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.organizations.iter().any(|org| org.uuid == uuid)
    }

    pub(crate) fn sync_total(&mut self) {
        self.total = self.organizations.len();
    }

    /// Replace the collection entry keyed by `uuid`, leaving others untouched.
    ///
    /// The lookup uses the requested uuid, not the one the server echoed back.
    pub(crate) fn replace(&mut self, uuid: &str, updated: &Organization) {
        if let Some(slot) = self.organizations.iter_mut().find(|org| org.uuid == uuid) {
            *slot = updated.clone();
        }
    }
}
