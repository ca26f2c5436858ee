//! HTTP route handlers for the portfolio builder.
//!
//! Editing routes work against the browser's session aggregate. The render,
//! preview and export routes also accept a `?data=` payload, which takes
//! precedence over the session when present.

use crate::document::export_document;
use crate::error::PortfolioError;
use crate::export::download;
use crate::models::{
    mime_essence, ColorScheme, Font, ImageAsset, ImageSlot, PortfolioData, PortfolioPatch,
    ProjectDraft, SocialLinksPatch,
};
use crate::render::Selection;
use crate::templates::{render_customize, render_gallery, render_preview};
use crate::transport;
use crate::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

fn customize_url(template_id: &str) -> String {
    format!("/customize/{}", urlencoding::encode(template_id))
}

// ============================================================================
// Gallery
// ============================================================================

pub async fn index() -> Html<String> {
    Html(render_gallery())
}

pub async fn healthz() -> &'static str {
    "ok"
}

// ============================================================================
// Customization Form
// ============================================================================

pub async fn customize_page(
    Path(template_id): Path<String>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    let selection = Selection::resolve(&template_id);
    let (token, jar) = state.sessions.ensure_session(jar).await;
    let data = state.sessions.snapshot(&token).await.unwrap_or_default();

    let page = render_customize(&selection, &data, state.config.max_upload_bytes);
    (jar, Html(page)).into_response()
}

/// Text fields of the profile form. Browsers send every input, so blank
/// strings arrive as `Some("")` and clear the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub color_scheme: Option<String>,
    pub font: Option<String>,
    /// Set by the "Generate Portfolio" button.
    pub next: Option<String>,
}

impl ProfileForm {
    pub fn into_patch(self) -> PortfolioPatch {
        let color_scheme = self.color_scheme.as_deref().and_then(|raw| {
            let parsed = raw.parse::<ColorScheme>().ok();
            if parsed.is_none() {
                tracing::debug!(value = raw, "ignoring unknown color scheme");
            }
            parsed
        });
        let font = self.font.as_deref().and_then(|raw| {
            let parsed = raw.parse::<Font>().ok();
            if parsed.is_none() {
                tracing::debug!(value = raw, "ignoring unknown font");
            }
            parsed
        });

        let social_links = if self.linkedin.is_some() || self.github.is_some() || self.twitter.is_some() {
            Some(SocialLinksPatch {
                linkedin: self.linkedin,
                github: self.github,
                twitter: self.twitter,
            })
        } else {
            None
        };

        PortfolioPatch {
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            experience: self.experience,
            education: self.education,
            projects: None,
            social_links,
            color_scheme,
            font,
        }
    }
}

pub async fn save_profile(
    Path(template_id): Path<String>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<ProfileForm>,
) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    let to_preview = form.next.as_deref() == Some("preview");
    let patch = form.into_patch();

    state.sessions.update(&token, |store| store.merge(patch)).await;
    tracing::debug!(template = %template_id, "profile merged");

    let target = if to_preview {
        format!("/preview/{}", urlencoding::encode(&template_id))
    } else {
        customize_url(&template_id)
    };
    (jar, Redirect::to(&target)).into_response()
}

// ============================================================================
// Projects
// ============================================================================

pub async fn add_project(
    Path(template_id): Path<String>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(draft): Form<ProjectDraft>,
) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    let added = state
        .sessions
        .update(&token, |store| store.add_project(draft))
        .await
        .unwrap_or(false);

    if !added {
        tracing::debug!("project missing name or description, not added");
    }
    (jar, Redirect::to(&customize_url(&template_id))).into_response()
}

pub async fn delete_project(
    Path((template_id, index)): Path<(String, usize)>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    let removed = state
        .sessions
        .update(&token, |store| store.remove_project(index))
        .await
        .unwrap_or(false);

    if !removed {
        tracing::debug!(index, "no project at index");
    }
    (jar, Redirect::to(&customize_url(&template_id))).into_response()
}

// ============================================================================
// Images
// ============================================================================

pub async fn upload_images(
    Path(template_id): Path<String>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    let limit = state.config.max_upload_bytes;
    let mut accepted = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read multipart body");
                break;
            }
        };

        let Some(slot) = field.name().and_then(ImageSlot::from_field_name) else {
            continue;
        };
        let content_type = mime_essence(field.content_type().unwrap_or(""));
        let file_name = field.file_name().unwrap_or("").to_string();

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(slot = slot.as_str(), error = %e, "failed to read upload");
                continue;
            }
        };

        // An untouched file input still submits an empty part.
        if bytes.is_empty() {
            continue;
        }
        match validate_image(&content_type, bytes.len(), limit) {
            Ok(()) => accepted.push((slot, ImageAsset::new(&content_type, file_name, bytes.to_vec()))),
            Err(e) => {
                tracing::warn!(slot = slot.as_str(), %file_name, error = %e, "upload rejected");
            }
        }
    }

    if !accepted.is_empty() {
        let count = accepted.len();
        state
            .sessions
            .update(&token, move |store| {
                for (slot, asset) in accepted {
                    store.set_image(slot, asset);
                }
            })
            .await;
        tracing::info!(count, "images stored");
    }

    (jar, Redirect::to(&customize_url(&template_id))).into_response()
}

/// `content_type` is a MIME essence; its subtype ends up inside a data URI,
/// so only token characters are allowed.
fn validate_image(content_type: &str, len: usize, limit: usize) -> crate::Result<()> {
    let subtype = content_type.strip_prefix("image/").unwrap_or("");
    let is_token = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'));
    if !is_token {
        return Err(PortfolioError::InvalidUpload(format!(
            "not an image type: {:?}",
            content_type
        )));
    }
    if len > limit {
        return Err(PortfolioError::InvalidUpload(format!(
            "{} bytes exceeds the {} byte limit",
            len, limit
        )));
    }
    Ok(())
}

pub async fn clear_image(
    Path((template_id, slot)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    match slot.parse::<ImageSlot>() {
        Ok(slot) => {
            state
                .sessions
                .update(&token, |store| store.clear_image(slot))
                .await;
        }
        Err(()) => tracing::warn!(%slot, "unknown image slot"),
    }
    (jar, Redirect::to(&customize_url(&template_id))).into_response()
}

// ============================================================================
// Session
// ============================================================================

pub async fn reset_session(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if let Some(token) = state.sessions.current(&jar).await {
        state.sessions.update(&token, |store| store.reset()).await;
        tracing::info!("session reset");
    }
    Redirect::to("/").into_response()
}

// ============================================================================
// Render / Preview / Export
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct DataQuery {
    pub data: Option<String>,
}

/// The aggregate a read-only route should render: the `data` payload when
/// given, otherwise the browser's session, otherwise defaults.
async fn resolve_data(state: &AppState, jar: &CookieJar, query: &DataQuery) -> PortfolioData {
    if let Some(json) = &query.data {
        return transport::parse_data(json);
    }
    match state.sessions.current(jar).await {
        Some(token) => state.sessions.snapshot(&token).await.unwrap_or_default(),
        None => PortfolioData::default(),
    }
}

pub async fn render_document(
    Path(template_id): Path<String>,
    Query(query): Query<DataQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Html<String> {
    let selection = Selection::resolve(&template_id);
    let data = resolve_data(&state, &jar, &query).await;
    Html(export_document(&selection, data, state.config.settle_timeout).await)
}

pub async fn preview_page(
    Path(template_id): Path<String>,
    Query(query): Query<DataQuery>,
) -> Html<String> {
    let selection = Selection::resolve(&template_id);
    // Re-encode so the links carry a normalized payload.
    let suffix = match &query.data {
        Some(json) => transport::data_query(Some(&transport::parse_data(json))),
        None => String::new(),
    };
    Html(render_preview(&selection, &suffix))
}

pub async fn export_portfolio(
    Path(template_id): Path<String>,
    Query(query): Query<DataQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    let selection = Selection::resolve(&template_id);
    let data = resolve_data(&state, &jar, &query).await;
    let html = export_document(&selection, data, state.config.settle_timeout).await;
    download(html, &state.config.export_filename)
}

// ============================================================================
// JSON API
// ============================================================================

pub async fn get_portfolio(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    match state.sessions.snapshot(&token).await {
        Some(data) => (jar, Json(data)).into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "Session unavailable").into_response(),
    }
}

pub async fn patch_portfolio(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(patch): Json<PortfolioPatch>,
) -> Response {
    let (token, jar) = state.sessions.ensure_session(jar).await;
    let merged = state
        .sessions
        .update(&token, |store| {
            store.merge(patch);
            store.snapshot()
        })
        .await;

    match merged {
        Some(data) => {
            tracing::debug!("portfolio patched via api");
            (jar, Json(data)).into_response()
        }
        None => (StatusCode::INTERNAL_SERVER_ERROR, "Session unavailable").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_form_patch() {
        let form = ProfileForm {
            name: Some("Ada".to_string()),
            github: Some("https://github.com/ada".to_string()),
            color_scheme: Some("dark".to_string()),
            font: Some("comic-sans".to_string()),
            ..Default::default()
        };
        let patch = form.into_patch();
        assert_eq!(patch.name.as_deref(), Some("Ada"));
        assert_eq!(patch.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(patch.font, None);

        let links = patch.social_links.unwrap();
        assert_eq!(links.github.as_deref(), Some("https://github.com/ada"));
        assert_eq!(links.linkedin, None);
    }

    #[test]
    fn test_profile_form_without_links() {
        let patch = ProfileForm::default().into_patch();
        assert!(patch.social_links.is_none());
        assert!(patch.projects.is_none());
    }

    #[test]
    fn test_validate_image() {
        assert!(validate_image("image/png", 10, 100).is_ok());
        assert!(validate_image("application/pdf", 10, 100).is_err());
        assert!(validate_image("", 10, 100).is_err());
        assert!(validate_image("image/jpeg", 101, 100).is_err());
        assert!(validate_image("image/", 10, 100).is_err());
        assert!(validate_image("image/p'ng", 10, 100).is_err());
        assert!(validate_image("image/svg+xml", 10, 100).is_ok());
        assert!(matches!(
            validate_image("text/html", 10, 100),
            Err(PortfolioError::InvalidUpload(_))
        ));
    }
}
