//! Server-Sent Events stream of live dashboard snapshots.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::UnboundedReceiverStream;

use zoneboard_app::store::Snapshot;
use zoneboard_app::view::EnrichedZone;
use zoneboard_domain::group::Group;

use crate::state::AppState;

/// One frame on the stream: a timestamped full snapshot with statuses
/// already derived.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotEvent {
    at: DateTime<Utc>,
    zones: Vec<EnrichedZone>,
    groups: Vec<Group>,
}

impl SnapshotEvent {
    fn of(snapshot: Snapshot) -> Self {
        Self {
            at: Utc::now(),
            zones: snapshot.zones.into_iter().map(EnrichedZone::of).collect(),
            groups: snapshot.groups,
        }
    }
}

/// `GET /api/events/stream` — SSE stream of full snapshots.
///
/// The connection gets the current snapshot immediately, then one frame per
/// store notification — the same no-diff contract the in-process observers
/// live by. Closing the connection drops the subscription.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    // First frame paints the screen without waiting for a mutation.
    let _ = tx.send(state.ctx.store().state());

    let subscription = state.ctx.store().subscribe(move |snapshot| {
        let _ = tx.send(snapshot.clone());
    });

    let frames = UnboundedReceiverStream::new(rx).filter_map(move |snapshot| {
        // Ties the store subscription to the stream's lifetime.
        let _ = &subscription;
        match serde_json::to_string(&SnapshotEvent::of(snapshot)) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize snapshot for SSE stream");
                None
            }
        }
    });

    Sse::new(frames).keep_alive(KeepAlive::default())
}
