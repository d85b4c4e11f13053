//! # Console Store
//!
//! This crate provides the organization store: an in-memory, per-consumer
//! cache of organizations driven by imperative actions against the
//! organization service.
//!
//! ## Overview
//!
//! The console-store crate handles:
//! - **State**: `organization`, `organizations`, `loading`, `error`, `total`, `page`, `limit`
//! - **Actions**: Fetch, create, update, status change, delete and bulk delete
//! - **Observation**: A `tokio::sync::watch` receiver per subscriber
//! - **Paging**: Client-side search and pagination over the cached collection
//!
//! ## Failure Policy
//!
//! Actions catch every service error, record it in `state.error` and return
//! a sentinel (`None` or `false`). Callers detect failure from the return
//! value or the state, never from a `Result`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console_client::{ClientConfig, OrganizationService};
//! use console_store::OrganizationStore;
//! use std::sync::Arc;
//!
//! async fn manage_tenants() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env();
//!     let store = OrganizationStore::new(Arc::new(OrganizationService::from_config(&config)?));
//!
//!     let mut updates = store.subscribe();
//!     tokio::spawn(async move {
//!         while updates.changed().await.is_ok() {
//!             let state = updates.borrow().clone();
//!             println!("loading={} total={}", state.loading, state.total);
//!         }
//!     });
//!
//!     store.get_tenants(&config.parent_org_uuid).await;
//!     let uuids = vec!["a".to_string(), "b".to_string()];
//!     if !store.bulk_delete_organizations(&uuids).await {
//!         store.clear_error();
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod state;
pub mod store;

// Re-export main types
pub use error::StoreError;
pub use state::OrganizationState;
pub use store::OrganizationStore;
