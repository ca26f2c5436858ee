//! Full-page preview with the download action.

use crate::render::common::html_escape;
use crate::render::Selection;

use super::components::base_html;

/// `data_query` is either empty or a `?data=...` suffix carried over from the
/// link that opened the preview.
pub fn render_preview(selection: &Selection, data_query: &str) -> String {
    let id = urlencoding::encode(selection.id()).into_owned();
    let heading = match selection.variant() {
        Some(variant) => format!("{} Preview", variant.display_name()),
        None => format!("Preview: {}", html_escape(selection.id())),
    };

    let content = format!(
        r#"<a href="/customize/{id}" class="back-link">&larr; Back to editing</a>
        <div class="preview-toolbar">
            <h1>{heading}</h1>
            <span class="spacer"></span>
            <a href="/export/{id}{query}" class="btn" download>Download Portfolio</a>
        </div>
        <iframe class="preview-frame" src="/render/{id}{query}" title="Portfolio preview"></iframe>"#,
        id = id,
        heading = heading,
        query = html_escape(data_query),
    );

    base_html("Portfolio Preview", &content, Some(selection.id()))
}
