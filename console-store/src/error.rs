//! Errors recorded in organization store state.

use console_client::ApiError;
use console_org::StatusTransitionError;
use thiserror::Error;

/// Failure of a store action.
///
/// Store actions never return this; it is recorded in
/// [`OrganizationState::error`](crate::OrganizationState::error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The organization service call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The requested status change is not allowed.
    #[error(transparent)]
    Transition(#[from] StatusTransitionError),
}

impl StoreError {
    /// HTTP status of the underlying API error, `0` otherwise.
    pub fn status(&self) -> u16 {
        match self {
            StoreError::Api(err) => err.status(),
            StoreError::Transition(_) => 0,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            StoreError::Api(err) => err.code(),
            StoreError::Transition(_) => Some("INVALID_STATUS_TRANSITION"),
        }
    }

    /// The transport error, if this came from the service.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            StoreError::Api(err) => Some(err),
            StoreError::Transition(_) => None,
        }
    }
}
