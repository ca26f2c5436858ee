//! Data models for the portfolio builder.
//!
//! This module contains the aggregate edited by the customization form,
//! its partial-update (patch) types, and the appearance enums.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Appearance
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Pick the light or dark variant of a class list.
    pub fn pick<'a>(&self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            ColorScheme::Light => light,
            ColorScheme::Dark => dark,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Sans, Font::Serif, Font::Mono];

    pub fn as_str(&self) -> &'static str {
        match self {
            Font::Sans => "sans",
            Font::Serif => "serif",
            Font::Mono => "mono",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Font::Sans => "Sans-serif",
            Font::Serif => "Serif",
            Font::Mono => "Monospace",
        }
    }
}

impl FromStr for Font {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sans" => Ok(Font::Sans),
            "serif" => Ok(Font::Serif),
            "mono" => Ok(Font::Mono),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown strings fall back to the default instead of failing the whole
// payload, so one bad field does not wipe every other field.
impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Font {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
    }
}

// ============================================================================
// Images
// ============================================================================

/// An uploaded image, kept as raw bytes until a renderer embeds it.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub content_type: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    /// Only the `type/subtype` essence of `content_type` is kept, so MIME
    /// parameters never reach the data URI.
    pub fn new(content_type: &str, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: mime_essence(content_type),
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Render the image as a `data:` URI so exported files stay standalone.
    pub fn data_uri(&self) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine};
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Lowercased `type/subtype` with any `;` parameters removed.
pub fn mime_essence(raw: &str) -> String {
    raw.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Profile,
    Cover,
}

impl ImageSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSlot::Profile => "profile",
            ImageSlot::Cover => "cover",
        }
    }

    /// Multipart field name used by the upload form.
    pub fn field_name(&self) -> &'static str {
        match self {
            ImageSlot::Profile => "profile_image",
            ImageSlot::Cover => "cover_image",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "profile_image" => Some(ImageSlot::Profile),
            "cover_image" => Some(ImageSlot::Cover),
            _ => None,
        }
    }
}

impl FromStr for ImageSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(ImageSlot::Profile),
            "cover" => Ok(ImageSlot::Cover),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Portfolio Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Links that are set and non-blank, in display order.
    pub fn present(&self) -> Vec<(SocialNetwork, &str)> {
        [
            (SocialNetwork::LinkedIn, &self.linkedin),
            (SocialNetwork::GitHub, &self.github),
            (SocialNetwork::Twitter, &self.twitter),
        ]
        .into_iter()
        .filter_map(|(network, link)| {
            link.as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(|l| (network, l))
        })
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    LinkedIn,
    GitHub,
    Twitter,
}

impl SocialNetwork {
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::GitHub => "GitHub",
            SocialNetwork::Twitter => "Twitter",
        }
    }

    /// Font Awesome brand icon class.
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "fab fa-linkedin",
            SocialNetwork::GitHub => "fab fa-github",
            SocialNetwork::Twitter => "fab fa-twitter",
        }
    }
}

/// Everything the user has entered in one customization session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: Vec<Project>,
    pub social_links: SocialLinks,
    pub color_scheme: ColorScheme,
    pub font: Font,
    #[serde(skip)]
    pub profile_image: Option<ImageAsset>,
    #[serde(skip)]
    pub cover_image: Option<ImageAsset>,
}

impl PortfolioData {
    pub fn image(&self, slot: ImageSlot) -> Option<&ImageAsset> {
        match slot {
            ImageSlot::Profile => self.profile_image.as_ref(),
            ImageSlot::Cover => self.cover_image.as_ref(),
        }
    }
}

// ============================================================================
// Partial Updates
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialLinksPatch {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
}

/// A partial update: every `Some` field replaces the current value.
///
/// Appearance fields are already typed here, so an unknown color scheme or
/// font can never reach the aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<Vec<Project>>,
    pub social_links: Option<SocialLinksPatch>,
    #[serde(deserialize_with = "strict_enum")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(deserialize_with = "strict_enum")]
    pub font: Option<Font>,
}

fn strict_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("unknown value `{}`", s))),
    }
}

/// Fields of the "add project" form before the required-field check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

impl ProjectDraft {
    /// Returns the project when both required fields are filled in.
    pub fn into_project(self) -> Option<Project> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return None;
        }
        Some(Project {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            link: self.link.trim().to_string(),
            image: self.image.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_asset_keeps_mime_essence() {
        let asset = ImageAsset::new(r#"Image/PNG; a=" onerror=x ""#, "a.png", b"PNG".to_vec());
        assert_eq!(asset.content_type, "image/png");
        assert_eq!(asset.data_uri(), "data:image/png;base64,UE5H");
        assert_eq!(mime_essence(""), "");
    }

    #[test]
    fn test_color_scheme_parse() {
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert_eq!(" Light ".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert!("purple".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_font_parse() {
        assert_eq!("mono".parse::<Font>(), Ok(Font::Mono));
        assert!("comic".parse::<Font>().is_err());
    }

    #[test]
    fn test_portfolio_json_uses_camel_case() {
        let data = PortfolioData {
            color_scheme: ColorScheme::Dark,
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["colorScheme"], "dark");
        assert!(json.get("socialLinks").is_some());
        assert!(json.get("profileImage").is_none());
    }

    #[test]
    fn test_unknown_scheme_defaults_field_wise() {
        let data: PortfolioData =
            serde_json::from_str(r#"{"name":"Ada","colorScheme":"neon","font":"serif"}"#).unwrap();
        assert_eq!(data.name, "Ada");
        assert_eq!(data.color_scheme, ColorScheme::Light);
        assert_eq!(data.font, Font::Serif);
    }

    #[test]
    fn test_patch_rejects_unknown_scheme() {
        let result = serde_json::from_str::<PortfolioPatch>(r#"{"colorScheme":"neon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_unknown_field() {
        let result = serde_json::from_str::<PortfolioPatch>(r#"{"nickname":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_social_links_present_skips_blank() {
        let links = SocialLinks {
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            github: Some("   ".to_string()),
            twitter: None,
        };
        let present = links.present();
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].0, SocialNetwork::LinkedIn);
    }

    #[test]
    fn test_project_draft_requires_name_and_description() {
        let draft = ProjectDraft {
            name: "".to_string(),
            description: "Something".to_string(),
            ..Default::default()
        };
        assert!(draft.into_project().is_none());

        let draft = ProjectDraft {
            name: "Compiler".to_string(),
            description: "A toy compiler".to_string(),
            ..Default::default()
        };
        let project = draft.into_project().unwrap();
        assert_eq!(project.name, "Compiler");
        assert!(project.link.is_empty());
    }

    #[test]
    fn test_image_data_uri() {
        let asset = ImageAsset {
            content_type: "image/png".to_string(),
            file_name: "me.png".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert_eq!(asset.data_uri(), "data:image/png;base64,AQID");
    }
}
