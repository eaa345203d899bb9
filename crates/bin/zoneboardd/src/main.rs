//! # zoneboardd — zoneboard daemon
//!
//! Composition root that wires the application together and starts the
//! server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Build the application context (store seeded once at startup — the only
//!   zone-creation path in the system)
//! - Mount the long-lived dashboard view whose drift ticker animates the
//!   simulation while the daemon runs
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use zoneboard_adapter_http_axum::{router, state::AppState};
use zoneboard_app::context::AppContext;
use zoneboard_app::store::ZoneStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Application context: one store for the whole process, injected
    // everywhere by reference.
    let ctx = if config.seed.demo {
        AppContext::seeded()
    } else {
        AppContext::new(ZoneStore::new(Vec::new(), Vec::new()))
    };
    tracing::info!(
        zones = ctx.store().zones().len(),
        groups = ctx.store().groups().len(),
        "store initialised"
    );

    // HTTP
    let state = AppState::new(ctx);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!("zoneboardd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
