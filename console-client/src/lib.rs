//! # Console Client
//!
//! This crate provides the REST transport and the organization service
//! client for the tenant console.
//!
//! ## Overview
//!
//! The console-client crate handles:
//! - **Config**: Base URL, timeout and default parent organization from the environment
//! - **Transport**: One JSON request per call, wrapped in an [`ApiResponse`] envelope
//! - **Errors**: A single [`ApiError`] taxonomy (HTTP status or network failure)
//! - **Organizations**: The [`OrganizationApi`] operations over fixed endpoint templates
//!
//! ## Error Taxonomy
//!
//! | Kind | `status()` | `code()` |
//! |---|---|---|
//! | `Http` | response status (>= 300) | server-provided code, if any |
//! | `Network` | `0` | `NETWORK_ERROR` |
//!
//! Timeouts, connection failures and undecodable bodies are all `Network`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console_client::{ClientConfig, OrganizationApi, OrganizationService};
//! use console_org::OrganizationCreateRequest;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env();
//!     config.validate()?;
//!
//!     let service = OrganizationService::from_config(&config)?;
//!     let tenants = service.get_tenants(&config.parent_org_uuid).await?;
//!     println!("{} tenants", tenants.len());
//!
//!     let request = OrganizationCreateRequest::new("Acme", "Widgets", 1, 1);
//!     let created = service.create(&request, None).await?;
//!     println!("created {}", created.uuid);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod organization;

// Re-export main types
pub use client::{ApiClient, ApiResponse, SUCCESS_MESSAGE};
pub use config::{ClientConfig, ConfigError, Environment};
pub use error::{ApiError, ApiResult};
pub use organization::{OrganizationApi, OrganizationService};
