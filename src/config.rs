/// Process-wide configuration, read once at startup
///
/// The service base address is the only required external parameter.
/// It is injected into the HTTP client at construction time and never
/// mutated afterwards.
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Immutable application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the analysis service, without a trailing slash.
    pub base_url: String,
    /// Upper bound on one analysis round-trip; expiry surfaces as a
    /// transport failure.
    pub request_timeout: Duration,
}

impl Config {
    /// Build the configuration from environment variables:
    /// `UI_ANALYZER_BASE_URL` and `UI_ANALYZER_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("UI_ANALYZER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("UI_ANALYZER_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    /// Normalize and store the base address.
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Config {
            base_url,
            request_timeout,
        }
    }
}
