//! Portfolio builder - pick a layout, fill in a form, download a standalone
//! HTML portfolio.
//!
//! This is the main entry point for the web server.
//! The application is organized into the following modules:
//!
//! - `models`: The portfolio aggregate and its partial updates
//! - `store`: Form state with merge semantics
//! - `sessions`: Cookie-keyed in-memory sessions
//! - `render`: Template selection and the three layouts
//! - `document`: Settle-then-serialize of standalone documents
//! - `export`: Download responses
//! - `templates`: Builder pages (gallery, form, preview)
//! - `handlers`: HTTP route handlers

use std::sync::Arc;
use std::time::Duration;

use portfolio::config::{init_logging, Config};
use portfolio::{app, AppState};

/// How often idle sessions are swept.
const PURGE_INTERVAL: Duration = Duration::from_secs(60);

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> portfolio::Result<()> {
    init_logging();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(config.clone()));

    let sweeper = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sweeper.sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "expired sessions removed");
            }
        }
    });

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!("Portfolio builder running at http://{}", config.addr);
    tracing::info!(
        settle_ms = config.settle_timeout.as_millis() as u64,
        session_ttl_minutes = config.session_ttl.num_minutes(),
        export_filename = %config.export_filename,
        "configuration loaded"
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
