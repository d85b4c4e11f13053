//! Organization store.
//!
//! Bridges the organization service to an observable [`OrganizationState`]
//! for a single consumer. Actions never return errors: a failure is recorded
//! in `state.error` and the action returns `None` or `false`.
//!
//! Every action follows the same shape:
//!
//! ```text
//! begin ── loading = true, error = None
//!   │
//!   ├─ service call ──ok──> reconcile organization / organizations
//!   │        └──────err──> error = Some(..)
//!   │
//! end (drop guard) ── loading = false
//! ```
//!
//! Overlapping actions are not sequenced; their reconciliations apply in
//! completion order.

use std::sync::Arc;

use console_client::OrganizationApi;
use console_org::{
    OrgStatus, Organization, OrganizationCreateRequest, OrganizationFilters,
    OrganizationListResponse, OrganizationUpdateRequest, DEFAULT_LIMIT,
};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::state::OrganizationState;

/// Per-consumer organization cache and controller.
///
/// Each store owns independent state; nothing is shared between stores.
///
/// # Examples
///
/// ```rust,no_run
/// use console_client::{ClientConfig, OrganizationService};
/// use console_store::OrganizationStore;
/// use std::sync::Arc;
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::from_env();
///     let service = OrganizationService::from_config(&config)?;
///     let store = OrganizationStore::new(Arc::new(service));
///
///     if !store.get_tenants(&config.parent_org_uuid).await {
///         let state = store.snapshot();
///         eprintln!("failed: {}", state.error.map(|e| e.to_string()).unwrap_or_default());
///     }
///     Ok(())
/// }
/// ```
pub struct OrganizationStore {
    /// Organization service.
    api: Arc<dyn OrganizationApi>,

    /// Current state; receivers observe every transition.
    state: watch::Sender<OrganizationState>,
}

impl std::fmt::Debug for OrganizationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationStore")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

/// Clears the in-flight marker when an action ends, including when its
/// future is dropped.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<OrganizationState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| {
            state.pending = state.pending.saturating_sub(1);
            state.loading = state.pending > 0;
        });
    }
}

impl OrganizationStore {
    /// Create a store over an organization service.
    pub fn new(api: Arc<dyn OrganizationApi>) -> Self {
        let (state, _) = watch::channel(OrganizationState::default());
        Self { api, state }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> OrganizationState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<OrganizationState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<StoreError> {
        self.state.borrow().error.clone()
    }

    fn begin(&self, action: &'static str) -> LoadingGuard<'_> {
        debug!(action, "Organization store action started");
        self.state.send_modify(|state| {
            state.pending += 1;
            state.loading = true;
            state.error = None;
        });
        LoadingGuard { state: &self.state }
    }

    fn fail(&self, action: &'static str, err: StoreError) {
        warn!(
            action,
            status = err.status(),
            code = err.code().unwrap_or(""),
            "Organization store action failed: {}",
            err
        );
        self.state.send_modify(|state| state.error = Some(err));
    }

    /// Fetch one organization.
    ///
    /// On success it becomes both `organization` and the sole entry of
    /// `organizations`, so detail views can reuse table rendering.
    pub async fn get_organization_by_uuid(&self, uuid: &str) -> Option<Organization> {
        let _loading = self.begin("get_organization_by_uuid");

        match self.api.get_by_uuid(uuid).await {
            Ok(org) => {
                self.state.send_modify(|state| {
                    state.organization = Some(org.clone());
                    state.organizations = vec![org.clone()];
                    state.sync_total();
                });
                Some(org)
            }
            Err(e) => {
                self.fail("get_organization_by_uuid", e.into());
                None
            }
        }
    }

    /// Fetch the tenants of `parent_uuid` and replace the collection.
    ///
    /// Returns `true` on success.
    pub async fn get_tenants(&self, parent_uuid: &str) -> bool {
        let _loading = self.begin("get_tenants");

        match self.api.get_tenants(parent_uuid).await {
            Ok(tenants) => {
                debug!(count = tenants.len(), "Tenant organizations loaded");
                self.state.send_modify(|state| {
                    state.organizations = tenants;
                    state.sync_total();
                });
                true
            }
            Err(e) => {
                self.fail("get_tenants", e.into());
                false
            }
        }
    }

    /// Replace the collection without a network call.
    pub fn load_organizations(&self, organizations: Vec<Organization>) {
        self.state.send_modify(|state| {
            state.organizations = organizations;
            state.sync_total();
        });
    }

    /// Create an organization and append it to the collection.
    pub async fn create_organization(
        &self,
        data: &OrganizationCreateRequest,
        parent_uuid: Option<&str>,
    ) -> Option<Organization> {
        let _loading = self.begin("create_organization");

        match self.api.create(data, parent_uuid).await {
            Ok(org) => {
                self.state.send_modify(|state| {
                    state.organization = Some(org.clone());
                    state.organizations.push(org.clone());
                    state.sync_total();
                });
                Some(org)
            }
            Err(e) => {
                self.fail("create_organization", e.into());
                None
            }
        }
    }

    /// Replace an organization; the collection entry with the same uuid is
    /// swapped for the returned entity.
    pub async fn update_organization(
        &self,
        uuid: &str,
        data: &OrganizationUpdateRequest,
    ) -> Option<Organization> {
        let _loading = self.begin("update_organization");

        match self.api.update(uuid, data).await {
            Ok(org) => {
                self.state.send_modify(|state| {
                    state.replace(uuid, &org);
                    state.organization = Some(org.clone());
                });
                Some(org)
            }
            Err(e) => {
                self.fail("update_organization", e.into());
                None
            }
        }
    }

    /// Change only the status of an organization.
    ///
    /// The update body is built from the existing entity: the cached copy
    /// when there is one, otherwise a fresh fetch. Moving a deleted
    /// organization back to active or inactive is rejected before any write.
    /// `organization` is replaced only when it already holds this uuid.
    pub async fn update_organization_status(
        &self,
        uuid: &str,
        status: OrgStatus,
    ) -> Option<Organization> {
        let _loading = self.begin("update_organization_status");

        match self.apply_status(uuid, status).await {
            Ok(org) => {
                self.state.send_modify(|state| {
                    state.replace(uuid, &org);
                    if state
                        .organization
                        .as_ref()
                        .is_some_and(|current| current.uuid == uuid)
                    {
                        state.organization = Some(org.clone());
                    }
                });
                Some(org)
            }
            Err(e) => {
                self.fail("update_organization_status", e);
                None
            }
        }
    }

    async fn apply_status(&self, uuid: &str, status: OrgStatus) -> Result<Organization, StoreError> {
        let cached = self.state.borrow().find(uuid).cloned();
        let existing = match cached {
            Some(org) => org,
            None => self.api.get_by_uuid(uuid).await?,
        };

        existing.status.transition_to(status)?;

        let request = OrganizationUpdateRequest::from(&existing).with_status(status);
        Ok(self.api.update(uuid, &request).await?)
    }

    /// Logically delete one organization and drop it from the collection.
    ///
    /// Returns `true` on success.
    pub async fn delete_organization(&self, uuid: &str) -> bool {
        let _loading = self.begin("delete_organization");

        match self.api.delete(uuid).await {
            Ok(_) => {
                self.state.send_modify(|state| {
                    state.organizations.retain(|org| org.uuid != uuid);
                    state.sync_total();
                });
                true
            }
            Err(e) => {
                self.fail("delete_organization", e.into());
                false
            }
        }
    }

    /// Logically delete several organizations and drop them from the
    /// collection.
    ///
    /// Returns `true` on success.
    pub async fn bulk_delete_organizations(&self, uuids: &[String]) -> bool {
        let _loading = self.begin("bulk_delete_organizations");

        match self.api.bulk_delete(uuids).await {
            Ok(_) => {
                self.state.send_modify(|state| {
                    state.organizations.retain(|org| !uuids.contains(&org.uuid));
                    state.sync_total();
                });
                true
            }
            Err(e) => {
                self.fail("bulk_delete_organizations", e.into());
                false
            }
        }
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|state| state.error = None);
    }

    pub fn clear_organization(&self) {
        self.state.send_modify(|state| state.organization = None);
    }

    /// Empty the collection and return to the first page.
    pub fn clear_organizations(&self) {
        self.state.send_modify(|state| {
            state.organizations.clear();
            state.total = 0;
            state.page = 1;
        });
    }

    /// Move to a page (1-based; 0 is treated as 1).
    pub fn set_page(&self, page: usize) {
        self.state.send_modify(|state| state.page = page.max(1));
    }

    /// Change the page size and return to the first page.
    pub fn set_limit(&self, limit: usize) {
        self.state.send_modify(|state| {
            state.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
            state.page = 1;
        });
    }

    /// Filter and page the cached collection.
    ///
    /// The store's `page` and `limit` apply unless `filters` sets its own.
    pub fn current_page(&self, filters: &OrganizationFilters) -> OrganizationListResponse {
        let state = self.state.borrow();
        let mut filters = filters.clone();
        filters.page = filters.page.or(Some(state.page));
        filters.limit = filters.limit.or(Some(state.limit));
        filters.apply(&state.organizations)
    }
}
