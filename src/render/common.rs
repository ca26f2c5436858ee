//! Helpers shared by the three layouts: text parsing, escaping, image
//! sources and the social/contact blocks.

use crate::models::{ColorScheme, ImageAsset, PortfolioData, Project};
use url::{ParseError, Url};

/// Inline placeholder used when a project has no image URL. A data URI keeps
/// exported documents free of relative asset paths.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSI0MDAiIGhlaWdodD0iMjQwIiB2aWV3Qm94PSIwIDAgNDAwIDI0MCI+PHJlY3Qgd2lkdGg9IjQwMCIgaGVpZ2h0PSIyNDAiIGZpbGw9IiNlNWU3ZWIiLz48cGF0aCBkPSJNMTYwIDE1MGw0MC01MCA0MCA1MHoiIGZpbGw9IiM5Y2EzYWYiLz48L3N2Zz4=";

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Schemes a user-supplied link may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Escape a user-supplied URL for an `href`/`src` attribute. Absolute URLs
/// outside `ALLOWED_SCHEMES` are replaced with `#`; scheme-less input is
/// kept as a relative reference.
pub fn safe_url(url: &str) -> String {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => html_escape(trimmed),
        Err(ParseError::RelativeUrlWithoutBase) => html_escape(trimmed),
        _ => "#".to_string(),
    }
}

// ============================================================================
// Text Parsing
// ============================================================================

/// Split a comma-separated skills string, trimming each entry and dropping
/// empty ones.
pub fn parse_skills(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

/// One entry per non-blank line, split on the first `" - "`. Lines without
/// the separator get an empty subtitle.
pub fn parse_experience(experience: &str) -> Vec<ExperienceEntry<'_>> {
    experience
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(" - ") {
            Some((title, subtitle)) => ExperienceEntry {
                title: title.trim(),
                subtitle: subtitle.trim(),
            },
            None => ExperienceEntry {
                title: line.trim(),
                subtitle: "",
            },
        })
        .collect()
}

pub fn skill_emoji(skill: &str) -> &'static str {
    match skill.to_lowercase().as_str() {
        "javascript" => "🟨",
        "python" => "🐍",
        "react" => "⚛️",
        "node.js" => "🟩",
        "html" => "🌐",
        "css" => "🎨",
        "typescript" => "🔷",
        "java" => "☕",
        "c++" => "🔧",
        "php" => "🐘",
        "ruby" => "💎",
        "swift" => "🍎",
        "go" => "🐹",
        "rust" => "🦀",
        "sql" => "🗃️",
        "mongodb" => "🍃",
        "docker" => "🐳",
        "kubernetes" => "☸️",
        "aws" => "☁️",
        "git" => "🔀",
        "linux" => "🐧",
        "machine learning" => "🤖",
        "data science" => "📊",
        "ui/ux design" => "🎭",
        "agile" => "🔄",
        "devops" => "🔁",
        _ => "💻",
    }
}

// ============================================================================
// Images
// ============================================================================

/// Attribute-escaped data URI of an uploaded image.
pub fn image_src(image: Option<&ImageAsset>) -> Option<String> {
    image.map(|asset| html_escape(&asset.data_uri()))
}

pub fn project_image_src(project: &Project) -> String {
    if project.image.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        safe_url(&project.image)
    }
}

pub fn profile_img(data: &PortfolioData, class: &str) -> String {
    match image_src(data.profile_image.as_ref()) {
        Some(src) => format!(
            r#"<img src="{src}" alt="{alt}" class="{class}">"#,
            src = src,
            alt = html_escape(&data.name),
            class = class,
        ),
        None => String::new(),
    }
}

/// Cover background layer with an overlay, or `fallback` markup when no
/// cover image was uploaded.
pub fn cover_layer(data: &PortfolioData, overlay_class: &str, fallback: &str) -> String {
    match image_src(data.cover_image.as_ref()) {
        Some(src) => format!(
            r#"<div class="absolute inset-0 bg-cover bg-center" style="background-image: url('{src}')"><div class="{overlay}"></div></div>"#,
            src = src,
            overlay = overlay_class,
        ),
        None => fallback.to_string(),
    }
}

// ============================================================================
// Shared Blocks
// ============================================================================

pub struct SocialStyle<'a> {
    pub container: &'a str,
    pub link: &'a str,
}

/// Icon links for the social networks that are filled in.
pub fn social_links(data: &PortfolioData, style: &SocialStyle) -> String {
    let links: String = data
        .social_links
        .present()
        .into_iter()
        .map(|(network, url)| {
            format!(
                r#"<a href="{url}" class="{class}" target="_blank" rel="noopener noreferrer" aria-label="{label}"><i class="{icon}"></i></a>"#,
                url = safe_url(url),
                class = style.link,
                label = network.label(),
                icon = network.icon_class(),
            )
        })
        .collect();

    format!(r#"<div class="{}">{}</div>"#, style.container, links)
}

/// Text with newlines turned into `<br>`.
pub fn multiline(text: &str) -> String {
    html_escape(text).replace('\n', "<br>")
}

pub fn footer_text(data: &PortfolioData) -> String {
    format!("&copy; {}. All rights reserved.", html_escape(&data.name))
}

pub fn root_attrs(data: &PortfolioData, layout: &str, scheme: ColorScheme) -> String {
    format!(
        r#"id="portfolio-content" data-template="{}" data-color-scheme="{}" data-font="{}""#,
        layout, scheme, data.font
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_drops_empty_tokens() {
        let skills = parse_skills("JavaScript, React,  , Node.js");
        assert_eq!(skills, vec!["JavaScript", "React", "Node.js"]);
    }

    #[test]
    fn test_parse_skills_empty_input() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ,").is_empty());
    }

    #[test]
    fn test_parse_experience_without_separator() {
        let entries = parse_experience("Engineer - Built X\nNoSeparatorLine");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Engineer");
        assert_eq!(entries[0].subtitle, "Built X");
        assert_eq!(entries[1].title, "NoSeparatorLine");
        assert_eq!(entries[1].subtitle, "");
    }

    #[test]
    fn test_parse_experience_splits_on_first_separator() {
        let entries = parse_experience("Lead - Acme - 2020-2023\r\n\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Lead");
        assert_eq!(entries[0].subtitle, "Acme - 2020-2023");
    }

    #[test]
    fn test_skill_emoji_lookup() {
        assert_eq!(skill_emoji("Rust"), "🦀");
        assert_eq!(skill_emoji("Machine Learning"), "🤖");
        assert_eq!(skill_emoji("COBOL"), "💻");
    }

    #[test]
    fn test_safe_url_allows_only_web_schemes() {
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url(" JavaScript:x"), "#");
        assert_eq!(safe_url("java\tscript:x"), "#");
        assert_eq!(safe_url("data:text/html,<script>alert(1)</script>"), "#");
        assert_eq!(safe_url("vbscript:msgbox"), "#");
        assert_eq!(safe_url("mailto:ada@example.com"), "mailto:ada@example.com");
        assert_eq!(safe_url("/projects/engine"), "/projects/engine");
        assert_eq!(
            safe_url("https://example.com/?a=1&b=\"2\""),
            "https://example.com/?a=1&amp;b=&quot;2&quot;"
        );
    }

    #[test]
    fn test_project_image_falls_back_to_placeholder() {
        let project = Project::default();
        assert_eq!(project_image_src(&project), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_cover_layer_fallback() {
        let data = PortfolioData::default();
        assert_eq!(cover_layer(&data, "overlay", "<div>gradient</div>"), "<div>gradient</div>");
    }
}
