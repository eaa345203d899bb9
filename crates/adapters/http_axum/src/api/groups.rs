//! JSON REST handlers for groups.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use zoneboard_domain::group::Group;
use zoneboard_domain::id::GroupId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a group.
#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub id: String,
    pub name: String,
}

/// Request body for a group-wide power command.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleGroupRequest {
    pub turn_on: bool,
}

/// `GET /api/groups`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Group>> {
    Json(state.ctx.store().groups())
}

/// `POST /api/groups`
///
/// Validates the new group, then appends it. Id uniqueness is the caller's
/// responsibility; the store accepts duplicates silently.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let group = Group::builder().id(req.id).name(req.name).build()?;
    state.ctx.store().add_group(group.clone());
    Ok((StatusCode::CREATED, Json(group)))
}

/// `DELETE /api/groups/{id}`
///
/// Release semantics: member zones lose their membership, nothing else.
/// Removing an unknown id is a silent no-op.
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.ctx.store().remove_group(&GroupId::new(id));
    StatusCode::NO_CONTENT
}

/// `POST /api/groups/{id}/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ToggleGroupRequest>,
) -> StatusCode {
    state
        .ctx
        .api()
        .toggle_group(&GroupId::new(id), req.turn_on)
        .await;
    StatusCode::NO_CONTENT
}
