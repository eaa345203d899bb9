//! Single-zone view model — the detail screen for one zone id.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use zoneboard_domain::id::ZoneId;
use zoneboard_domain::zone::{MIN_SET_POINT, Zone, ZonePatch};

use crate::api::ApiService;
use crate::context::AppContext;
use crate::store::{Subscription, ZoneStore, lock};
use crate::view::EnrichedZone;

/// How often an active detail view advances the drift simulation.
///
/// Offset from the list view's period on purpose; see the note there about
/// simultaneously mounted views.
pub const DRIFT_PERIOD: Duration = Duration::from_secs(5);

struct RawState {
    zones: Vec<Zone>,
    is_loading: bool,
}

/// Live view model behind the zone detail screen.
///
/// Power toggles go through the façade like any remote command; set-point
/// steps write the store directly and take effect synchronously. That
/// asymmetry is part of the design: adjusting the target is a local
/// control, flipping power is a command to the (pretend) remote end.
pub struct ZoneDetailView {
    zone_id: ZoneId,
    state: Arc<Mutex<RawState>>,
    store: Arc<ZoneStore>,
    api: ApiService,
    subscription: Option<Subscription>,
    ticker: Option<JoinHandle<()>>,
}

impl ZoneDetailView {
    /// Mount the view for one zone id. Same lifecycle as the list view:
    /// synchronous seed, simulated fetch, subscription, own drift ticker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(ctx: &AppContext, zone_id: ZoneId) -> Self {
        let state = Arc::new(Mutex::new(RawState {
            zones: ctx.store().zones(),
            is_loading: true,
        }));

        let fetched = Arc::clone(&state);
        let api = ctx.api().clone();
        tokio::spawn(async move {
            let zones = api.fetch_all_zones().await;
            let mut state = lock(&fetched);
            state.zones = zones;
            state.is_loading = false;
        });

        let observed = Arc::clone(&state);
        let subscription = ctx.store().subscribe(move |snapshot| {
            lock(&observed).zones = snapshot.zones.clone();
        });

        let store = Arc::clone(ctx.store());
        let ticker = tokio::spawn(async move {
            loop {
                sleep(DRIFT_PERIOD).await;
                store.simulate_temp_change();
            }
        });

        Self {
            zone_id,
            state,
            store: Arc::clone(ctx.store()),
            api: ctx.api().clone(),
            subscription: Some(subscription),
            ticker: Some(ticker),
        }
    }

    /// The enriched zone, or `None` while loading or when the id matches
    /// nothing.
    #[must_use]
    pub fn zone(&self) -> Option<EnrichedZone> {
        lock(&self.state)
            .zones
            .iter()
            .find(|z| z.id == self.zone_id)
            .cloned()
            .map(EnrichedZone::of)
    }

    /// True until the first façade fetch has resolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        lock(&self.state).is_loading
    }

    /// The loading finished and the id still matches nothing. Surfaced as a
    /// presentation state, never as an error.
    #[must_use]
    pub fn not_found(&self) -> bool {
        !self.is_loading() && self.zone().is_none()
    }

    /// Forward a power toggle to the façade, fire and forget.
    pub fn toggle(&self) {
        let api = self.api.clone();
        let id = self.zone_id.clone();
        tokio::spawn(async move {
            api.toggle_zone(&id).await;
        });
    }

    /// Step the target temperature up by one, synchronously.
    pub fn set_point_up(&self) {
        step_set_point(&self.store, &self.zone_id, 1);
    }

    /// Step the target temperature down by one, synchronously, never below
    /// the floor.
    pub fn set_point_down(&self) {
        step_set_point(&self.store, &self.zone_id, -1);
    }

    /// Unmount: unsubscribe and stop the drift ticker. In-flight fetches
    /// are left running.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for ZoneDetailView {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Adjust a zone's set point by `step`, clamped to [`MIN_SET_POINT`] from
/// below. Writes the store directly — no façade, no delay. Unknown ids are
/// ignored.
pub fn step_set_point(store: &ZoneStore, id: &ZoneId, step: i32) {
    let Some(zone) = store.zones().into_iter().find(|z| &z.id == id) else {
        return;
    };
    let set_point = (zone.set_point + step).max(MIN_SET_POINT);
    store.update_zone(id, ZonePatch::new().set_point(set_point));
}
