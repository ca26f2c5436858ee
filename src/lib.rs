//! Portfolio builder library.
//!
//! Exposes the router and every module so integration tests and `main` share
//! one assembly of the application.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod render;
pub mod sessions;
pub mod store;
pub mod templates;
pub mod transport;

use config::Config;
use sessions::SessionStore;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self { config, sessions }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// ============================================================================
// Router
// ============================================================================

/// Multipart overhead allowed on top of the two image payloads.
const UPLOAD_SLACK_BYTES: usize = 64 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    // Both image slots may be uploaded in one request.
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_mul(2)
        .saturating_add(UPLOAD_SLACK_BYTES);

    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        // Editing
        .route(
            "/customize/{template_id}",
            get(handlers::customize_page).post(handlers::save_profile),
        )
        .route("/customize/{template_id}/projects", post(handlers::add_project))
        .route(
            "/customize/{template_id}/projects/{index}/delete",
            post(handlers::delete_project),
        )
        .route("/customize/{template_id}/images", post(handlers::upload_images))
        .route(
            "/customize/{template_id}/images/{slot}/clear",
            post(handlers::clear_image),
        )
        .route("/session/reset", post(handlers::reset_session))
        // Output
        .route("/render/{template_id}", get(handlers::render_document))
        .route("/preview/{template_id}", get(handlers::preview_page))
        .route("/export/{template_id}", get(handlers::export_portfolio))
        // JSON API
        .route(
            "/api/portfolio",
            get(handlers::get_portfolio).post(handlers::patch_portfolio),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use document::{export_document, serialize_document, RenderJob};
pub use error::{PortfolioError, Result};
pub use models::{
    ColorScheme, Font, ImageAsset, ImageSlot, PortfolioData, PortfolioPatch, Project,
    ProjectDraft, SocialLinks,
};
pub use render::{Fragment, Selection, TemplateVariant};
pub use store::FormStore;
