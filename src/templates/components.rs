//! Shared HTML components for the builder pages.
//!
//! Contains the navigation bar and the base page template.

use crate::render::common::html_escape;

use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(template_id: Option<&str>) -> String {
    let template_links = match template_id {
        Some(id) => {
            let id = urlencoding::encode(id);
            format!(
                r#"<a href="/customize/{id}">Edit</a>
            <a href="/preview/{id}">Preview</a>
            <a href="/export/{id}">Download</a>"#,
                id = id
            )
        }
        None => String::new(),
    };

    format!(
        r#"<nav class="nav-bar">
            <a href="/" class="brand">Portfolio Builder</a>
            <a href="/">Templates</a>
            {template_links}
            <span class="spacer"></span>
            <form action="/session/reset" method="post" onsubmit="return confirm('Clear everything you have entered?')">
                <button type="submit">Start over</button>
            </form>
        </nav>"#,
        template_links = template_links
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str, template_id: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        nav = nav_bar(template_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_without_template() {
        let nav = nav_bar(None);
        assert!(nav.contains("Templates"));
        assert!(!nav.contains("/export/"));
    }

    #[test]
    fn test_nav_links_encode_template_id() {
        let nav = nav_bar(Some("a b"));
        assert!(nav.contains("/preview/a%20b"));
    }

    #[test]
    fn test_base_html_escapes_title() {
        let html = base_html("<Ada>", "<p>body</p>", None);
        assert!(html.contains("<title>&lt;Ada&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
