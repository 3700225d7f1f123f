use std::fmt;

/// Message used when the backend rejects a request without saying why.
pub const GENERIC_FAILURE: &str = "API request failed";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The client could not be built (bad base URL, TLS setup).
    Config(String),
    /// The request never produced an HTTP response.
    Network(String),
    /// Non-2xx response; `message` is the backend's `error` field.
    Server { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Build a `Server` error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Self::Server { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Client configuration error: {msg}"),
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Server { message, .. } => f.write_str(message),
            Self::Decode(msg) => write!(f, "Failed to parse response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
