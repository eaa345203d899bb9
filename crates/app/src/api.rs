//! API façade — pretends the store sits behind a remote service.
//!
//! Wraps store writes in artificial latency so callers treat them as
//! asynchronous and eventually consistent. None of these calls can fail:
//! there is no network and no validation behind them, and that absence of an
//! error path is the contract, not an omission.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use zoneboard_domain::id::{GroupId, ZoneId};
use zoneboard_domain::zone::{Zone, ZonePatch};

use crate::store::ZoneStore;

/// Simulated round trip for the initial zone fetch.
pub const FETCH_DELAY: Duration = Duration::from_millis(500);
/// Simulated round trip for a single-zone power toggle.
pub const TOGGLE_DELAY: Duration = Duration::from_millis(300);

/// The fake remote boundary in front of the [`ZoneStore`].
#[derive(Clone)]
pub struct ApiService {
    store: Arc<ZoneStore>,
}

impl ApiService {
    /// Create a façade over the given store.
    #[must_use]
    pub fn new(store: Arc<ZoneStore>) -> Self {
        Self { store }
    }

    /// `GET /zones` — resolve with the current zone snapshot after a fixed
    /// delay. One-shot read; does not subscribe.
    pub async fn fetch_all_zones(&self) -> Vec<Zone> {
        sleep(FETCH_DELAY).await;
        self.store.zones()
    }

    /// `POST /zones/{id}/toggle` — after a fixed delay, write the negation
    /// of the zone's current power flag.
    ///
    /// Fire and forget: an unknown id resolves without effect and without a
    /// notification (the store is never touched).
    pub async fn toggle_zone(&self, id: &ZoneId) {
        sleep(TOGGLE_DELAY).await;
        let Some(zone) = self.store.zones().into_iter().find(|z| &z.id == id) else {
            tracing::debug!(zone = %id, "toggle for unknown zone dropped");
            return;
        };
        self.store
            .update_zone(id, ZonePatch::new().power(!zone.is_on));
    }

    /// `POST /groups/{id}/toggle` — set every member zone's power flag.
    ///
    /// Resolves immediately: no artificial delay, one store write per member
    /// (so N member zones fan out N notifications, not one batch).
    pub async fn toggle_group(&self, group_id: &GroupId, turn_on: bool) {
        let members: Vec<ZoneId> = self
            .store
            .zones()
            .into_iter()
            .filter(|z| z.group_id.as_ref() == Some(group_id))
            .map(|z| z.id)
            .collect();
        for id in members {
            self.store.update_zone(&id, ZonePatch::new().power(turn_on));
        }
    }
}
