//! Zones-collection view model — everything the dashboard list screen shows.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use zoneboard_domain::group::Group;
use zoneboard_domain::id::{GroupId, ZoneId};
use zoneboard_domain::summary::GroupPowerSummary;
use zoneboard_domain::zone::Zone;

use crate::api::ApiService;
use crate::context::AppContext;
use crate::store::{Subscription, lock};
use crate::view::EnrichedZone;

/// How often an active list view advances the drift simulation.
///
/// Each mounted view runs its own ticker; a list view and a detail view
/// mounted at the same time therefore drift at both cadences.
pub const DRIFT_PERIOD: Duration = Duration::from_secs(4);

struct RawState {
    zones: Vec<Zone>,
    groups: Vec<Group>,
    is_loading: bool,
}

/// Derived state for the zones list screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonesViewState {
    /// Ordered list of known groups.
    pub groups: Vec<Group>,
    /// Group id → enriched zones in that group. Every known group is
    /// present, even when empty; a zone whose group id references nothing
    /// appears in no bucket and is not an orphan either.
    pub grouped_zones: HashMap<GroupId, Vec<EnrichedZone>>,
    /// Zones with no group at all.
    pub orphan_zones: Vec<EnrichedZone>,
    /// True until the first façade fetch resolves.
    pub is_loading: bool,
}

impl ZonesViewState {
    /// Power summary line for one group's header.
    #[must_use]
    pub fn group_summary(&self, id: &GroupId) -> GroupPowerSummary {
        self.grouped_zones.get(id).map_or(GroupPowerSummary::Empty, |zones| {
            GroupPowerSummary::of(zones.iter().map(|z| &z.zone))
        })
    }
}

/// Live view model behind the zones list screen.
pub struct ZonesView {
    state: Arc<Mutex<RawState>>,
    api: ApiService,
    subscription: Option<Subscription>,
    ticker: Option<JoinHandle<()>>,
}

impl ZonesView {
    /// Mount the view: seed synchronously from the store snapshot, issue the
    /// simulated fetch, subscribe for updates, start this view's drift
    /// ticker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(ctx: &AppContext) -> Self {
        let snapshot = ctx.store().state();
        let state = Arc::new(Mutex::new(RawState {
            zones: snapshot.zones,
            groups: snapshot.groups,
            is_loading: true,
        }));

        // One-shot refresh. Deliberately not cancelled on unmount: a late
        // resolution lands in the shared state where nobody minds it.
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
            let mut state = lock(&observed);
            state.zones = snapshot.zones.clone();
            state.groups = snapshot.groups.clone();
        });

        let store = Arc::clone(ctx.store());
        let ticker = tokio::spawn(async move {
            loop {
                sleep(DRIFT_PERIOD).await;
                store.simulate_temp_change();
            }
        });

        Self {
            state,
            api: ctx.api().clone(),
            subscription: Some(subscription),
            ticker: Some(ticker),
        }
    }

    /// Derive the current screen state.
    #[must_use]
    pub fn state(&self) -> ZonesViewState {
        let state = lock(&self.state);
        let mut grouped_zones: HashMap<GroupId, Vec<EnrichedZone>> = state
            .groups
            .iter()
            .map(|group| (group.id.clone(), Vec::new()))
            .collect();
        let mut orphan_zones = Vec::new();

        for zone in state.zones.iter().cloned().map(EnrichedZone::of) {
            match &zone.zone.group_id {
                Some(group_id) => {
                    if let Some(members) = grouped_zones.get_mut(group_id) {
                        members.push(zone);
                    }
                    // Dangling membership: the zone is shown nowhere.
                }
                None => orphan_zones.push(zone),
            }
        }

        ZonesViewState {
            groups: state.groups.clone(),
            grouped_zones,
            orphan_zones,
            is_loading: state.is_loading,
        }
    }

    /// True until the first façade fetch has resolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        lock(&self.state).is_loading
    }

    /// Forward a power toggle to the façade, fire and forget. The resulting
    /// state change arrives later through the subscription.
    pub fn toggle_zone(&self, id: ZoneId) {
        let api = self.api.clone();
        tokio::spawn(async move {
            api.toggle_zone(&id).await;
        });
    }

    /// Forward a group-wide power command to the façade, fire and forget.
    pub fn toggle_group(&self, group_id: GroupId, turn_on: bool) {
        let api = self.api.clone();
        tokio::spawn(async move {
            api.toggle_group(&group_id, turn_on).await;
        });
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

impl Drop for ZonesView {
    fn drop(&mut self) {
        self.unmount();
    }
}
