use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Festivo client
#[derive(Error, Debug)]
pub enum FestivoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Festivo API returned HTTP {status}")]
    Request { status: StatusCode },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FestivoError>;

impl FestivoError {
    /// HTTP status carried by a [`FestivoError::Request`]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FestivoError::Request { status } => Some(*status),
            FestivoError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Get the error code for structured output
    pub fn error_code(&self) -> &'static str {
        match self {
            FestivoError::Config(_) => "CONFIG_ERROR",
            FestivoError::InvalidUrl(_) => "INVALID_URL",
            FestivoError::Request { .. } => "REQUEST_ERROR",
            FestivoError::Decode(_) => "DECODE_ERROR",
            FestivoError::Transport(_) => "TRANSPORT_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        });

        if let Some(status) = self.status() {
            payload["error"]["status"] = serde_json::json!(status.as_u16());
        }

        payload
    }
}

impl From<serde_json::Error> for FestivoError {
    fn from(err: serde_json::Error) -> Self {
        FestivoError::Decode(err.to_string())
    }
}
