//! Error types for the cart store.

use thiserror::Error;

/// Errors returned by [`CartClient`](crate::clients::CartClient).
///
/// Cart operations themselves never fail: clamping is silent and storage problems are only
/// logged. The one failure left is the store task being gone.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Cart store unavailable: {0}")]
    StoreUnavailable(String),
}
