//! Standalone document serialization.
//!
//! A layout renders on the blocking pool and signals completion through a
//! oneshot channel. The serializer waits for that signal (bounded), then
//! wraps the fragment in a full HTML document with its inline styles moved
//! into the head and its inline scripts moved to the end of the body.

use crate::error::{PortfolioError, Result};
use crate::models::PortfolioData;
use crate::render::common::html_escape;
use crate::render::{Fragment, Selection};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::oneshot;

// ============================================================================
// External Resources
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalResource {
    Script(&'static str),
    Stylesheet(&'static str),
}

impl ExternalResource {
    fn tag(&self) -> String {
        match self {
            ExternalResource::Script(url) => {
                format!(r#"<script src="{}"></script>"#, html_escape(url))
            }
            ExternalResource::Stylesheet(url) => {
                format!(r#"<link href="{}" rel="stylesheet">"#, html_escape(url))
            }
        }
    }
}

/// Referenced by URL, not bundled: exported files need network access.
pub const EXTERNAL_RESOURCES: &[ExternalResource] = &[
    ExternalResource::Script("https://cdn.tailwindcss.com"),
    ExternalResource::Stylesheet(
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap",
    ),
    ExternalResource::Script("https://unpkg.com/react@17/umd/react.production.min.js"),
    ExternalResource::Script("https://unpkg.com/react-dom@17/umd/react-dom.production.min.js"),
    ExternalResource::Stylesheet(
        "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
    ),
];

const BASE_STYLE: &str = "body {\n    font-family: 'Inter', sans-serif;\n}";

const BASE_SCRIPT: &str = "document.addEventListener('DOMContentLoaded', () => {\n    if (window.tailwind && window.tailwind.refresh) {\n        window.tailwind.refresh();\n    }\n});";

// ============================================================================
// Render Settling
// ============================================================================

/// A render in flight. Dropping it abandons the result.
pub struct RenderJob {
    done: oneshot::Receiver<Fragment>,
}

impl RenderJob {
    pub fn spawn(selection: Selection, data: PortfolioData) -> Self {
        Self::spawn_with(move || selection.render(&data))
    }

    /// Run any render closure on the blocking pool.
    pub fn spawn_with<F>(render: F) -> Self
    where
        F: FnOnce() -> Fragment + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            // Receiver gone means the caller already gave up waiting.
            let _ = tx.send(render());
        });
        Self { done: rx }
    }

    /// Wait for the render to complete, at most `bound`.
    pub async fn settle(self, bound: Duration) -> Result<Fragment> {
        match tokio::time::timeout(bound, self.done).await {
            Ok(Ok(fragment)) => Ok(fragment),
            Ok(Err(_)) => Err(PortfolioError::RenderAborted),
            Err(_) => Err(PortfolioError::RenderTimeout(bound.as_millis() as u64)),
        }
    }
}

// ============================================================================
// Inline Block Extraction
// ============================================================================

fn style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style\s*>").expect("valid regex"))
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").expect("valid regex")
    })
}

/// Fragment markup split into body markup and its inline blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFragment {
    pub body: String,
    pub styles: Vec<String>,
    pub scripts: Vec<String>,
}

/// Pull every inline `<style>` and `<script>` block out of `markup`, in
/// document order. Scripts with a `src` attribute are left in place.
pub fn extract_inline(markup: &str) -> ExtractedFragment {
    let mut styles = Vec::new();
    let without_styles = style_re().replace_all(markup, |caps: &Captures| {
        push_trimmed(&mut styles, &caps[1]);
        String::new()
    });

    let mut scripts = Vec::new();
    let body = script_re().replace_all(&without_styles, |caps: &Captures| {
        if caps[1].to_ascii_lowercase().contains("src=") {
            return caps[0].to_string();
        }
        push_trimmed(&mut scripts, &caps[2]);
        String::new()
    });

    ExtractedFragment {
        body: body.trim().to_string(),
        styles,
        scripts,
    }
}

fn push_trimmed(into: &mut Vec<String>, content: &str) {
    let trimmed = content.trim();
    if !trimmed.is_empty() {
        into.push(trimmed.to_string());
    }
}

// ============================================================================
// Serialization
// ============================================================================

pub fn document_title(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} - Portfolio", name)
    }
}

/// Build the standalone document. Pure: the same fragment and name always
/// give the same bytes.
pub fn serialize_document(fragment: &Fragment, name: &str) -> String {
    let extracted = extract_inline(&fragment.markup);

    let resources: Vec<String> = EXTERNAL_RESOURCES.iter().map(|r| r.tag()).collect();

    let mut style = String::from(BASE_STYLE);
    for block in &extracted.styles {
        style.push('\n');
        style.push_str(block);
    }

    let mut script = String::from(BASE_SCRIPT);
    for block in &extracted.scripts {
        script.push('\n');
        script.push_str(block);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
{resources}
<style>
{style}
</style>
</head>
<body>
{body}
<script>
{script}
</script>
</body>
</html>
"#,
        title = html_escape(&document_title(name)),
        resources = resources.join("\n"),
        style = style,
        body = extracted.body,
        script = script,
    )
}

/// Render, settle and serialize. A render that times out or dies yields the
/// placeholder document.
pub async fn export_document(
    selection: &Selection,
    data: PortfolioData,
    bound: Duration,
) -> String {
    let name = data.name.clone();
    let fragment = match RenderJob::spawn(selection.clone(), data).settle(bound).await {
        Ok(fragment) => fragment,
        Err(e) => {
            tracing::warn!(template = selection.id(), error = %e, "render failed, using placeholder");
            Fragment::placeholder()
        }
    };
    serialize_document(&fragment, &name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TemplateVariant;

    fn sample_data() -> PortfolioData {
        PortfolioData {
            name: "Ada Lovelace".to_string(),
            skills: "Rust, Go".to_string(),
            ..Default::default()
        }
    }

    fn assert_single_blocks(doc: &str) {
        assert_eq!(doc.matches("<style").count(), 1, "style blocks");
        assert_eq!(doc.matches("<script>").count(), 1, "inline script blocks");
        assert!(doc.ends_with("</script>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_bare_fragment_gets_empty_blocks() {
        let doc = serialize_document(&Fragment::new("<p>hello</p>"), "Ada");
        assert_single_blocks(&doc);
        assert!(doc.contains("<style>\nbody {"));
        assert!(doc.contains("<body>\n<p>hello</p>\n<script>"));
    }

    #[test]
    fn test_inline_blocks_are_rehomed() {
        let fragment = Fragment::new(
            "<div><style>.a { color: red; }</style><p>x</p><script>console.log(1)</script><style>.b{}</style></div>",
        );
        let doc = serialize_document(&fragment, "Ada");
        assert_single_blocks(&doc);

        let head_end = doc.find("</head>").unwrap();
        assert!(doc.find(".a { color: red; }").unwrap() < head_end);
        assert!(doc.find(".b{}").unwrap() < head_end);
        assert!(doc.find("console.log(1)").unwrap() > doc.find("<p>x</p>").unwrap());
    }

    #[test]
    fn test_external_script_tags_are_kept() {
        let extracted = extract_inline(r#"<script src="x.js"></script><script>y()</script>"#);
        assert_eq!(extracted.body, r#"<script src="x.js"></script>"#);
        assert_eq!(extracted.scripts, vec!["y()".to_string()]);
    }

    #[test]
    fn test_head_has_resources_and_title() {
        let doc = serialize_document(&Fragment::new(""), "Ada & Co");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<meta charset="UTF-8">"#));
        assert!(doc.contains("<title>Ada &amp; Co - Portfolio</title>"));
        assert!(doc.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(doc.contains("family=Inter"));
        assert!(doc.contains("font-awesome"));
        assert!(doc.contains(
            r#"<script src="https://unpkg.com/react@17/umd/react.production.min.js"></script>"#
        ));
        assert!(doc.contains(
            r#"<script src="https://unpkg.com/react-dom@17/umd/react-dom.production.min.js"></script>"#
        ));
        let head_end = doc.find("</head>").unwrap();
        assert!(doc.find("react-dom@17").unwrap() < head_end);
    }

    #[test]
    fn test_blank_name_title() {
        assert_eq!(document_title("  "), "Portfolio");
    }

    #[test]
    fn test_every_layout_serializes_with_single_blocks() {
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&sample_data(), sample_data().color_scheme);
            let doc = serialize_document(&fragment, "Ada Lovelace");
            assert_single_blocks(&doc);
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        for variant in TemplateVariant::ALL {
            let data = sample_data();
            let first = serialize_document(&variant.render(&data, data.color_scheme), &data.name);
            let second = serialize_document(&variant.render(&data, data.color_scheme), &data.name);
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn test_settle_returns_fragment() {
        let job = RenderJob::spawn(
            Selection::Template(TemplateVariant::Professional),
            sample_data(),
        );
        let fragment = job.settle(Duration::from_secs(5)).await.unwrap();
        assert!(fragment.markup.contains("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_settle_times_out() {
        let job = RenderJob::spawn_with(|| {
            std::thread::sleep(Duration::from_millis(300));
            Fragment::new("late")
        });
        let result = job.settle(Duration::from_millis(10)).await;
        assert!(matches!(result, Err(PortfolioError::RenderTimeout(10))));
    }

    #[tokio::test]
    async fn test_settle_reports_aborted_render() {
        let job = RenderJob::spawn_with(|| panic!("render blew up"));
        let result = job.settle(Duration::from_secs(5)).await;
        assert!(matches!(result, Err(PortfolioError::RenderAborted)));
    }

    #[tokio::test]
    async fn test_export_document_deterministic() {
        let selection = Selection::resolve("creative");
        let first = export_document(&selection, sample_data(), Duration::from_secs(5)).await;
        let second = export_document(&selection, sample_data(), Duration::from_secs(5)).await;
        assert_eq!(first, second);
        assert!(first.contains("<title>Ada Lovelace - Portfolio</title>"));
    }

    #[tokio::test]
    async fn test_export_document_invalid_template() {
        let selection = Selection::resolve("nope");
        let doc = export_document(&selection, sample_data(), Duration::from_secs(5)).await;
        assert!(doc.contains("Invalid template selected"));
        assert_single_blocks(&doc);
    }
}
