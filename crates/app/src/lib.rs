//! # zoneboard-app
//!
//! Application layer — the reactive core behind the dashboard.
//!
//! ## Responsibilities
//! - Own the **authoritative in-memory state**: [`store::ZoneStore`], the
//!   single mutable resource every consumer shares, with synchronous
//!   full-snapshot change notifications
//! - Imitate the service boundary: [`api::ApiService`] wraps store writes in
//!   artificial latency so callers treat them as remote and eventually
//!   consistent
//! - Derive what the dashboard shows: the [`view`] models subscribe, fetch,
//!   and join zones to groups with computed statuses
//! - Provide the demo [`seed`] dataset and the [`context::AppContext`]
//!   wiring root (an explicit context object, not a global singleton, so
//!   tests can build isolated instances)
//!
//! ## Dependency rule
//! Depends on `zoneboard-domain` only (plus `tokio` for tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod api;
pub mod context;
pub mod seed;
pub mod store;
pub mod view;
