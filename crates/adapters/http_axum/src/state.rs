//! Shared application state for axum handlers.

use std::sync::Arc;

use zoneboard_app::context::AppContext;
use zoneboard_app::view::ZonesView;

/// Application state shared across all axum handlers.
///
/// Holds the wiring context plus one long-lived [`ZonesView`]: the
/// server-side stand-in for the mounted dashboard screen. Its drift ticker
/// is what keeps ambient temperatures moving in a running daemon.
#[derive(Clone)]
pub struct AppState {
    pub ctx: AppContext,
    pub dashboard: Arc<ZonesView>,
}

impl AppState {
    /// Build the handler state and mount the dashboard view.
    ///
    /// Must be called from within a tokio runtime (the view spawns its
    /// fetch and ticker tasks).
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let dashboard = Arc::new(ZonesView::mount(&ctx));
        Self { ctx, dashboard }
    }
}
