//! Portfolio layouts and template selection.
//!
//! ## Module Structure
//!
//! - `common` - parsing and markup helpers shared by every layout
//! - `minimalist`, `creative`, `professional` - the three layouts
//!
//! A template identifier arrives from a URL path segment, so it is resolved
//! once into a [`Selection`]. Unknown identifiers select an inert
//! placeholder instead of failing.

pub mod common;
mod creative;
mod minimalist;
mod professional;

use crate::models::{ColorScheme, PortfolioData};

/// Markup produced by a layout. Inline `<style>` and `<script>` blocks are
/// left in place; the document serializer re-homes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub markup: String,
}

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Shown for unknown template identifiers and failed renders.
    pub fn placeholder() -> Self {
        Self::new(r#"<div id="portfolio-content">Invalid template selected</div>"#)
    }
}

// ============================================================================
// Template Variants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    Minimalist,
    Creative,
    Professional,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 3] = [
        TemplateVariant::Minimalist,
        TemplateVariant::Creative,
        TemplateVariant::Professional,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "minimalist" => Some(TemplateVariant::Minimalist),
            "creative" => Some(TemplateVariant::Creative),
            "professional" => Some(TemplateVariant::Professional),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TemplateVariant::Minimalist => "minimalist",
            TemplateVariant::Creative => "creative",
            TemplateVariant::Professional => "professional",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateVariant::Minimalist => "Minimalist",
            TemplateVariant::Creative => "Creative",
            TemplateVariant::Professional => "Professional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateVariant::Minimalist => {
                "Centered header, skill badges and a clean single column."
            }
            TemplateVariant::Creative => "Bold gradient hero, serif type and hover-reveal projects.",
            TemplateVariant::Professional => {
                "Compact banner, experience timeline and a project grid."
            }
        }
    }

    pub fn render(&self, data: &PortfolioData, scheme: ColorScheme) -> Fragment {
        match self {
            TemplateVariant::Minimalist => minimalist::render(data, scheme),
            TemplateVariant::Creative => creative::render(data, scheme),
            TemplateVariant::Professional => professional::render(data, scheme),
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Template(TemplateVariant),
    Invalid(String),
}

impl Selection {
    pub fn resolve(template_id: &str) -> Self {
        match TemplateVariant::from_id(template_id) {
            Some(variant) => Selection::Template(variant),
            None => Selection::Invalid(template_id.to_string()),
        }
    }

    pub fn variant(&self) -> Option<TemplateVariant> {
        match self {
            Selection::Template(v) => Some(*v),
            Selection::Invalid(_) => None,
        }
    }

    /// Identifier to use in links back to this selection.
    pub fn id(&self) -> &str {
        match self {
            Selection::Template(v) => v.id(),
            Selection::Invalid(id) => id,
        }
    }

    pub fn render(&self, data: &PortfolioData) -> Fragment {
        match self {
            Selection::Template(variant) => variant.render(data, data.color_scheme),
            Selection::Invalid(_) => Fragment::placeholder(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, SocialLinks};

    fn sample_data() -> PortfolioData {
        PortfolioData {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            bio: "Wrote the first program.".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            skills: "JavaScript, React,  , Node.js".to_string(),
            experience: "Engineer - Built X\nNoSeparatorLine".to_string(),
            education: "University of London".to_string(),
            projects: vec![Project {
                name: "Engine".to_string(),
                description: "Analytical".to_string(),
                link: "https://example.com/engine".to_string(),
                image: String::new(),
            }],
            social_links: SocialLinks {
                github: Some("https://github.com/ada".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_known_ids() {
        for variant in TemplateVariant::ALL {
            assert_eq!(Selection::resolve(variant.id()), Selection::Template(variant));
        }
    }

    #[test]
    fn test_resolve_unknown_id_is_placeholder() {
        for id in ["", "Minimalist", "../etc/passwd", "brutalist", "<script>"] {
            let selection = Selection::resolve(id);
            assert_eq!(selection, Selection::Invalid(id.to_string()));
            assert_eq!(selection.render(&sample_data()), Fragment::placeholder());
        }
    }

    #[test]
    fn test_every_layout_renders_three_skills() {
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&sample_data(), ColorScheme::Light);
            assert_eq!(
                fragment.markup.matches(r#"class="skill"#).count(),
                3,
                "{} skill count",
                variant.id()
            );
            let js = fragment.markup.find("JavaScript").unwrap();
            let react = fragment.markup.find("React").unwrap();
            let node = fragment.markup.find("Node.js").unwrap();
            assert!(js < react && react < node);
        }
    }

    #[test]
    fn test_every_layout_renders_two_experience_entries() {
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&sample_data(), ColorScheme::Dark);
            assert_eq!(
                fragment.markup.matches(r#"class="experience-entry"#).count(),
                2,
                "{} experience count",
                variant.id()
            );
            assert!(fragment.markup.contains("NoSeparatorLine"));
        }
    }

    #[test]
    fn test_every_layout_handles_empty_data() {
        let data = PortfolioData::default();
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&data, ColorScheme::Light);
            assert!(fragment.markup.contains(r#"id="projects""#));
            assert!(!fragment.markup.contains("<img"));
            assert!(!fragment.markup.contains("fa-github"));
        }
    }

    #[test]
    fn test_every_layout_escapes_user_text() {
        let data = PortfolioData {
            name: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&data, ColorScheme::Light);
            assert!(!fragment.markup.contains("<script>alert(1)"));
            assert!(fragment.markup.contains("&lt;script&gt;alert(1)"));
        }
    }

    #[test]
    fn test_dark_scheme_changes_classes() {
        for variant in TemplateVariant::ALL {
            let light = variant.render(&sample_data(), ColorScheme::Light);
            let dark = variant.render(&sample_data(), ColorScheme::Dark);
            assert!(dark.markup.contains("bg-gray-900"));
            assert_ne!(light.markup, dark.markup);
        }
    }

    #[test]
    fn test_only_filled_social_links_render() {
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&sample_data(), ColorScheme::Light);
            assert!(fragment.markup.contains("fa-github"));
            assert!(!fragment.markup.contains("fa-linkedin"));
            assert!(!fragment.markup.contains("fa-twitter"));
        }
    }

    #[test]
    fn test_uploaded_images_are_embedded() {
        use crate::models::ImageAsset;
        let mut data = sample_data();
        data.profile_image = Some(ImageAsset {
            content_type: "image/png".to_string(),
            file_name: "ada.png".to_string(),
            bytes: vec![1, 2, 3],
        });
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&data, ColorScheme::Light);
            assert!(fragment.markup.contains("data:image/png;base64,AQID"));
        }
    }

    #[test]
    fn test_project_links_outside_web_schemes_are_dropped() {
        let data = PortfolioData {
            projects: vec![Project {
                name: "Engine".to_string(),
                description: "Analytical".to_string(),
                link: "data:text/html,<b>x</b>".to_string(),
                image: "javascript:alert(1)".to_string(),
            }],
            ..Default::default()
        };
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&data, ColorScheme::Light);
            assert!(!fragment.markup.contains("data:text/html"));
            assert!(!fragment.markup.contains("javascript:"));
        }
    }

    #[test]
    fn test_image_content_type_cannot_leave_attribute() {
        use crate::models::ImageAsset;
        let asset = ImageAsset {
            content_type: r#"image/png" onerror="x"#.to_string(),
            file_name: "a.png".to_string(),
            bytes: vec![1],
        };
        let data = PortfolioData {
            profile_image: Some(asset.clone()),
            cover_image: Some(asset),
            ..Default::default()
        };
        for variant in TemplateVariant::ALL {
            let fragment = variant.render(&data, ColorScheme::Light);
            assert!(!fragment.markup.contains(r#"" onerror=""#));
            assert!(fragment.markup.contains("image/png&quot; onerror"));
        }
    }
}
