use thiserror::Error;

/// Failures of a single API call. Every variant ends up as one error toast;
/// the distinction only matters for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server or the response never arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {detail}")]
    Server { status: u16, detail: String },
    /// The request could not be built, e.g. an invalid MIME type on the upload part.
    #[error("invalid request: {0}")]
    Request(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("cannot read upload source: {0}")]
    Io(String),
    #[error("cannot open download: {0}")]
    Launch(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }

    /// Build a `Server` error from a status and raw body, preferring the
    /// `{"detail": ...}` message the backend uses for errors.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| match v.get("detail") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
                None => None,
            })
            .unwrap_or_else(|| body.trim().to_string());
        ApiError::Server { status, detail }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ApiError::Request(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Server { status: status.as_u16(), detail: e.to_string() }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(e.to_string())
    }
}
