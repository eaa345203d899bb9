//! # zoneboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the dashboard's derived state as a **JSON API**
//!   (`/api/zones`, `/api/groups`, …)
//! - Forward user intents (toggle, set-point steps, group management) into
//!   the application layer
//! - Stream live, timestamped snapshots over **SSE** so clients re-render on
//!   every store notification, the way the original screens did
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `zoneboard-app` (context, view models) and `zoneboard-domain`
//! (types used in request/response mapping). Never leaks axum types into the
//! application layer.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
