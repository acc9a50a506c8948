//! Error types for the order store.

use thiserror::Error;

/// Errors returned by [`OrderClient`](crate::clients::OrderClient).
///
/// API failures are not errors here: they land in [`OrderState::error`](super::OrderState).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order store unavailable: {0}")]
    StoreUnavailable(String),
}
