//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: `Store started` / `Shutdown` per store, with a `store` field
//! - **Intents**: `Begin` and `Resolve` with `kind` and `generation`, and
//!   `Dropped superseded resolution` when a stale worker loses the race
//! - **Workers**: each runs in a `worker` span carrying the store, kind and generation
//! - **API**: `Bad request`, `Not found`, `Server error` at error level with the status code
//! - **Cart**: clamping at debug level; storage read/write failures at warn level
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and API errors only
//! RUST_LOG=info cargo run
//!
//! # Every action, ticket and payload
//! RUST_LOG=debug cargo run
//!
//! # Actor and worker plumbing for every store (cart, orders, products)
//! RUST_LOG=storefront_core::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a detail fetch that loses to a newer one looks like:
//!
//! ```text
//! DEBUG Begin store="orders" kind=Detail generation=1 action=DetailRequested("A")
//! DEBUG Begin store="orders" kind=Detail generation=2 action=DetailRequested("B")
//! DEBUG Resolve store="orders" kind=Detail generation=2 action=DetailSucceeded(..)
//! DEBUG Dropped superseded resolution store="orders" kind=Detail generation=1
//! DEBUG worker: Outcome superseded by a newer intent store="orders" kind=Detail generation=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // store names are carried as fields
        .compact()
        .init();
}
