use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LIST_LIMIT: u32 = 100;
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the file storage API, resolved once at startup.
    pub api_base_url: Url,
    /// Page size requested when listing files.
    pub list_limit: u32,
    /// How long a toast stays on screen.
    pub toast_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup("API_URL").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_base_url(raw.trim()).unwrap_or_else(|| {
                log::warn!("Ignoring invalid API_URL '{}', using {}", raw, DEFAULT_API_URL);
                default_base_url()
            }),
            None => default_base_url(),
        };

        Self {
            api_base_url,
            list_limit: lookup("LIST_LIMIT")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_LIST_LIMIT),
            toast_timeout: Duration::from_millis(
                lookup("TOAST_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS),
            ),
        }
    }
}

fn parse_base_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    let http = matches!(url.scheme(), "http" | "https");
    (http && !url.cannot_be_a_base()).then_some(url)
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default API URL is valid")
}
