//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Stores never fail an action, so the only
//! failure a caller can see is the actor task being gone.

/// Errors that can occur within the store framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
