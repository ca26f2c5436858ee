//! Download sink: hands a serialized document to the browser as a file.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};

use crate::config::DEFAULT_EXPORT_FILENAME;

/// Reduce a user- or config-supplied name to a safe `.html` file name.
pub fn sanitize_filename(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    let stem = cleaned
        .strip_suffix(".html")
        .or_else(|| cleaned.strip_suffix(".htm"))
        .unwrap_or(cleaned)
        .trim_end_matches('.');

    if stem.is_empty() {
        DEFAULT_EXPORT_FILENAME.to_string()
    } else {
        format!("{}.html", stem)
    }
}

/// Strong ETag for a document body.
pub fn etag(html: &str) -> String {
    let digest = Sha256::digest(html.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("\"{}\"", hex)
}

/// Attachment response carrying `html` unchanged.
pub fn download(html: String, filename: &str) -> Response {
    let filename = sanitize_filename(filename);
    let disposition = format!("attachment; filename=\"{}\"", filename);
    let tag = etag(&html);

    tracing::info!(%filename, bytes = html.len(), "exporting portfolio");

    let mut response = (StatusCode::OK, html).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    if let Ok(value) = HeaderValue::from_str(&tag) {
        headers.insert(header::ETAG, value);
    }
    response
}
