//! Application context — explicit wiring instead of an implicit global.
//!
//! The original design kept the store as a process-wide singleton; here it
//! is built once at process start and handed by reference to every
//! consumer, so tests can construct as many isolated instances as they
//! like.

use std::sync::Arc;

use crate::api::ApiService;
use crate::seed;
use crate::store::ZoneStore;

/// Everything a consumer needs: the shared store and the façade over it.
///
/// Cheap to clone; all clones point at the same store.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<ZoneStore>,
    api: ApiService,
}

impl AppContext {
    /// Wire a context around the given store.
    #[must_use]
    pub fn new(store: ZoneStore) -> Self {
        let store = Arc::new(store);
        let api = ApiService::new(Arc::clone(&store));
        Self { store, api }
    }

    /// Context pre-loaded with the demo dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(ZoneStore::new(seed::zones(), seed::groups()))
    }

    /// The shared store.
    #[must_use]
    pub fn store(&self) -> &Arc<ZoneStore> {
        &self.store
    }

    /// The fake remote boundary.
    #[must_use]
    pub fn api(&self) -> &ApiService {
        &self.api
    }
}
