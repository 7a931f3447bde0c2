//! Error types for asset generation.

use std::time::Duration;

/// Errors that can occur while generating landing-page assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// API key missing or invalid.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Delay suggested by the service, if it sent one.
        retry_after: Option<Duration>,
    },

    /// Content was blocked by safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// The response carried no part with inline image data.
    #[error("no image data in response: {0}")]
    MissingImage(String),

    /// Two catalog entries share a name.
    #[error("duplicate job name in catalog: {0}")]
    DuplicateJobName(String),

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 data.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., saving file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for asset generation operations.
pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssetError::Api {
            status: 404,
            message: "Not found".into(),
        };
        assert_eq!(err.to_string(), "API error: 404 - Not found");

        let err = AssetError::ContentBlocked("Safety filter triggered".into());
        assert_eq!(err.to_string(), "content blocked: Safety filter triggered");

        let err = AssetError::MissingImage("model returned text only".into());
        assert_eq!(
            err.to_string(),
            "no image data in response: model returned text only"
        );

        let err = AssetError::DuplicateJobName("hero_bg".into());
        assert_eq!(err.to_string(), "duplicate job name in catalog: hero_bg");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AssetError = io.into();
        assert!(matches!(err, AssetError::Io(_)));
    }
}
