//! In-memory zone store — the single authoritative copy of all state.
//!
//! Every mutating call updates the collections, takes a fresh snapshot, and
//! synchronously invokes all registered observers with it, in registration
//! order. There is no batching: N back-to-back mutations produce N
//! callbacks. Mutations are structural replacements and cannot fail; a write
//! against an unknown id is a no-op that still notifies, matching the
//! permissive contract the rest of the system is built on.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use zoneboard_domain::group::Group;
use zoneboard_domain::id::{GroupId, ZoneId};
use zoneboard_domain::zone::{Zone, ZonePatch};

/// A point-in-time copy of both collections.
///
/// Mutating a snapshot never affects the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub zones: Vec<Zone>,
    pub groups: Vec<Group>,
}

type Callback = Arc<dyn Fn(&Snapshot) + Send + Sync>;

struct Observer {
    id: Uuid,
    callback: Callback,
}

type ObserverList = Mutex<Vec<Observer>>;

#[derive(Default)]
struct Collections {
    zones: Vec<Zone>,
    groups: Vec<Group>,
}

/// The authoritative in-memory store of zones and groups.
///
/// Not a global: one instance is owned by the
/// [`AppContext`](crate::context::AppContext) and shared by reference.
pub struct ZoneStore {
    collections: Mutex<Collections>,
    observers: Arc<ObserverList>,
}

impl ZoneStore {
    /// Create a store holding the given collections.
    #[must_use]
    pub fn new(zones: Vec<Zone>, groups: Vec<Group>) -> Self {
        Self {
            collections: Mutex::new(Collections { zones, groups }),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot both collections.
    #[must_use]
    pub fn state(&self) -> Snapshot {
        let collections = lock(&self.collections);
        Snapshot {
            zones: collections.zones.clone(),
            groups: collections.groups.clone(),
        }
    }

    /// Snapshot the zone collection.
    #[must_use]
    pub fn zones(&self) -> Vec<Zone> {
        lock(&self.collections).zones.clone()
    }

    /// Snapshot the group collection.
    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        lock(&self.collections).groups.clone()
    }

    /// Merge `patch` into the zone matching `id`.
    ///
    /// Unknown ids are a no-op, but observers are notified either way.
    pub fn update_zone(&self, id: &ZoneId, patch: ZonePatch) {
        self.mutate(|collections| {
            if let Some(zone) = collections.zones.iter_mut().find(|z| &z.id == id) {
                zone.apply(patch);
            } else {
                tracing::debug!(zone = %id, "update for unknown zone ignored");
            }
        });
    }

    /// Append a group. The caller owns id uniqueness; duplicates are
    /// accepted silently.
    pub fn add_group(&self, group: Group) {
        self.mutate(|collections| {
            collections.groups.push(group);
        });
    }

    /// Remove a group and release its zones (`group_id` back to `None`).
    ///
    /// Release, not cascade: the zones stay, only the membership goes.
    pub fn remove_group(&self, id: &GroupId) {
        self.mutate(|collections| {
            collections.groups.retain(|g| &g.id != id);
            for zone in &mut collections.zones {
                if zone.group_id.as_ref() == Some(id) {
                    zone.group_id = None;
                }
            }
        });
    }

    /// Drift every powered-on zone's ambient temperature by ±1.
    ///
    /// Models sensor noise, not a control loop: nothing pulls the reading
    /// toward the set point. Zones that are off keep their reading.
    pub fn simulate_temp_change(&self) {
        let mut rng = rand::rng();
        self.mutate(|collections| {
            for zone in &mut collections.zones {
                if zone.is_on {
                    zone.ambient_temp += if rng.random_bool(0.5) { 1 } else { -1 };
                }
            }
        });
    }

    /// Register `callback` to receive the full snapshot after every
    /// mutation.
    ///
    /// Callbacks run synchronously inside the mutating call, in
    /// registration order, after the store's locks are released (so a
    /// callback may itself mutate the store).
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&Snapshot) + Send + Sync + 'static) -> Subscription {
        let id = Uuid::new_v4();
        lock(&self.observers).push(Observer {
            id,
            callback: Arc::new(callback),
        });
        Subscription {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.observers).len()
    }

    fn mutate(&self, apply: impl FnOnce(&mut Collections)) {
        let snapshot = {
            let mut collections = lock(&self.collections);
            apply(&mut collections);
            Snapshot {
                zones: collections.zones.clone(),
                groups: collections.groups.clone(),
            }
        };
        let callbacks: Vec<Callback> = lock(&self.observers)
            .iter()
            .map(|observer| Arc::clone(&observer.callback))
            .collect();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

/// Handle returned by [`ZoneStore::subscribe`].
///
/// Deregisters its callback on [`unsubscribe`](Subscription::unsubscribe)
/// or on drop; unsubscribing twice is harmless.
pub struct Subscription {
    id: Uuid,
    observers: Weak<ObserverList>,
}

impl Subscription {
    /// Remove exactly this callback from the observer list.
    pub fn unsubscribe(&self) {
        if let Some(observers) = self.observers.upgrade() {
            lock(&observers).retain(|observer| observer.id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
