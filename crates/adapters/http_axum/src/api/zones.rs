//! JSON REST handlers for zones.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use zoneboard_app::view::EnrichedZone;
use zoneboard_app::view::detail::step_set_point;
use zoneboard_domain::error::NotFoundError;
use zoneboard_domain::id::{GroupId, ZoneId};
use zoneboard_domain::summary::GroupPowerSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// One group as the dashboard renders it: metadata, the header summary
/// line, and its member zones.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: GroupId,
    pub name: String,
    pub summary: String,
    pub zones: Vec<EnrichedZone>,
}

/// The whole dashboard screen.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub groups: Vec<GroupView>,
    pub orphan_zones: Vec<EnrichedZone>,
    pub is_loading: bool,
}

/// `GET /api/zones` — the derived dashboard state, in group order.
pub async fn list(State(state): State<AppState>) -> Json<DashboardResponse> {
    let mut view = state.dashboard.state();
    let grouped_zones = &mut view.grouped_zones;
    let groups = view
        .groups
        .iter()
        .map(|group| {
            let zones = grouped_zones.remove(&group.id).unwrap_or_default();
            let summary = GroupPowerSummary::of(zones.iter().map(|z| &z.zone)).to_string();
            GroupView {
                id: group.id.clone(),
                name: group.name.clone(),
                summary,
                zones,
            }
        })
        .collect();

    Json(DashboardResponse {
        groups,
        orphan_zones: view.orphan_zones,
        is_loading: view.is_loading,
    })
}

/// `GET /api/zones/{id}` — one enriched zone.
///
/// An unknown id is the only user-visible "failure" in the system and it is
/// presentational: a not-found body, not a fault.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EnrichedZone>, ApiError> {
    let zone_id = ZoneId::new(&id);
    let zone = state
        .ctx
        .store()
        .zones()
        .into_iter()
        .find(|z| z.id == zone_id)
        .map(EnrichedZone::of)
        .ok_or(NotFoundError {
            entity: "Zone",
            id,
        })?;
    Ok(Json(zone))
}

/// `POST /api/zones/{id}/toggle` — flip one zone's power through the
/// façade. Resolves after the simulated round trip; unknown ids resolve
/// with no effect.
pub async fn toggle(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.ctx.api().toggle_zone(&ZoneId::new(id)).await;
    StatusCode::NO_CONTENT
}

/// `POST /api/zones/{id}/set-point/raise` — local, instant control: writes
/// the store directly, no façade.
pub async fn raise_set_point(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    step_set_point(state.ctx.store(), &ZoneId::new(id), 1);
    StatusCode::NO_CONTENT
}

/// `POST /api/zones/{id}/set-point/lower` — as raise, floored at the
/// domain minimum.
pub async fn lower_set_point(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    step_set_point(state.ctx.store(), &ZoneId::new(id), -1);
    StatusCode::NO_CONTENT
}
