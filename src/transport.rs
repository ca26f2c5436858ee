//! URL transport for the portfolio aggregate.
//!
//! The `data` query value is the aggregate as percent-encoded JSON. It is
//! lossy: images have no JSON form and are dropped. Sessions are the primary
//! handoff; this codec exists for shareable preview links.

use crate::error::{PortfolioError, Result};
use crate::models::PortfolioData;

pub fn encode_data(data: &PortfolioData) -> String {
    // Serializing plain strings and enums cannot fail.
    let json = serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string());
    urlencoding::encode(&json).into_owned()
}

/// Parse a `data` value that has already been percent-decoded (as the
/// `Query` extractor hands it over). Anything malformed becomes an empty
/// aggregate.
pub fn parse_data(json: &str) -> PortfolioData {
    or_default(serde_json::from_str(json).map_err(PortfolioError::from))
}

fn or_default(result: Result<PortfolioData>) -> PortfolioData {
    match result {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!(error = %e, "falling back to empty portfolio data");
            PortfolioData::default()
        }
    }
}

/// Query-string suffix (`?data=...`) for links that carry the aggregate.
pub fn data_query(data: Option<&PortfolioData>) -> String {
    match data {
        Some(d) => format!("?data={}", encode_data(d)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorScheme, ImageAsset, Project};

    fn decode(encoded: &str) -> PortfolioData {
        parse_data(&urlencoding::decode(encoded).unwrap())
    }

    #[test]
    fn test_encoded_value_is_url_safe() {
        let data = PortfolioData {
            name: "Ada & Co / \"quotes\"".to_string(),
            ..Default::default()
        };
        let encoded = encode_data(&data);
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('"'));
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn test_decode_keeps_fields_and_drops_images() {
        let data = PortfolioData {
            name: "Ada".to_string(),
            color_scheme: ColorScheme::Dark,
            projects: vec![Project {
                name: "Engine".to_string(),
                description: "Analytical".to_string(),
                ..Default::default()
            }],
            profile_image: Some(ImageAsset {
                content_type: "image/png".to_string(),
                file_name: "ada.png".to_string(),
                bytes: vec![1],
            }),
            ..Default::default()
        };

        let decoded = decode(&encode_data(&data));
        assert_eq!(decoded.name, "Ada");
        assert_eq!(decoded.color_scheme, ColorScheme::Dark);
        assert_eq!(decoded.projects, data.projects);
        assert!(decoded.profile_image.is_none());
    }

    #[test]
    fn test_malformed_payload_defaults() {
        assert_eq!(decode("%7Bnot-json"), PortfolioData::default());
        assert_eq!(decode("[1,2,3]"), PortfolioData::default());
        assert_eq!(parse_data("{"), PortfolioData::default());
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let decoded = decode(&urlencoding::encode(r#"{"name":"Lin"}"#));
        assert_eq!(decoded.name, "Lin");
        assert!(decoded.projects.is_empty());
        assert_eq!(decoded.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_parse_data_accepts_percent_literals() {
        let decoded = parse_data(r#"{"bio":"100% remote"}"#);
        assert_eq!(decoded.bio, "100% remote");
        assert_eq!(parse_data("null"), PortfolioData::default());
    }

    #[test]
    fn test_data_query() {
        assert_eq!(data_query(None), "");
        assert!(data_query(Some(&PortfolioData::default())).starts_with("?data=%7B"));
    }
}
