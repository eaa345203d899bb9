//! JSON REST handlers, mounted under `/api`.

pub mod groups;
pub mod sse;
pub mod zones;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::state::AppState;

/// Assemble the `/api` routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(zones::list))
        .route("/zones/{id}", get(zones::get))
        .route("/zones/{id}/toggle", post(zones::toggle))
        .route("/zones/{id}/set-point/raise", post(zones::raise_set_point))
        .route("/zones/{id}/set-point/lower", post(zones::lower_set_point))
        .route("/groups", get(groups::list).post(groups::create))
        .route("/groups/{id}", delete(groups::remove))
        .route("/groups/{id}/toggle", post(groups::toggle))
        .route("/events/stream", get(sse::stream))
}
