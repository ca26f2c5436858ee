//! Runtime configuration and logging setup.
//!
//! Settings come from `PORTFOLIO_*` environment variables, read once at
//! startup. A malformed value is logged and replaced by its default.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SETTLE_MS: u64 = 2000;
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 120;
/// Matches the "up to 10MB" limit shown on the upload form.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_EXPORT_FILENAME: &str = "portfolio.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub settle_timeout: Duration,
    pub session_ttl: chrono::Duration,
    pub max_upload_bytes: usize,
    pub export_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            settle_timeout: Duration::from_millis(DEFAULT_SETTLE_MS),
            session_ttl: chrono::Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let addr = lookup("PORTFOLIO_ADDR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.addr);

        let settle_ms = parse_or(&lookup, "PORTFOLIO_SETTLE_MS", DEFAULT_SETTLE_MS);
        let ttl_minutes = parse_or(
            &lookup,
            "PORTFOLIO_SESSION_TTL_MINUTES",
            DEFAULT_SESSION_TTL_MINUTES,
        );
        let max_upload_bytes = parse_or(
            &lookup,
            "PORTFOLIO_MAX_UPLOAD_BYTES",
            DEFAULT_MAX_UPLOAD_BYTES,
        );

        let export_filename = lookup("PORTFOLIO_EXPORT_FILENAME")
            .map(|s| crate::export::sanitize_filename(&s))
            .unwrap_or(defaults.export_filename);

        let session_ttl = match chrono::Duration::try_minutes(ttl_minutes.max(1)) {
            Some(ttl) => ttl,
            None => {
                tracing::warn!(
                    key = "PORTFOLIO_SESSION_TTL_MINUTES",
                    value = ttl_minutes,
                    "session ttl out of range, using default"
                );
                defaults.session_ttl
            }
        };

        Self {
            addr,
            settle_timeout: Duration::from_millis(settle_ms),
            session_ttl,
            max_upload_bytes,
            export_filename,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring invalid config value");
                default
            }
        },
    }
}

// ============================================================================
// Logging
// ============================================================================

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
