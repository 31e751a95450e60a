//! Error types for the surveyscope core library.
//!
//! Uses `thiserror` for public API error types with structured variants
//! covering the platform API, configuration, and IO domains.

use std::path::PathBuf;

/// Top-level error type for the surveyscope core library.
#[derive(Debug, thiserror::Error)]
pub enum SurveyscopeError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from survey platform API interactions.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Connection to survey platform failed: {message}")]
    Connection { message: String },

    #[error("Not logged in or session expired")]
    Unauthorized,

    #[error("No permission for this survey")]
    Forbidden,

    #[error("Resource not found: {what}")]
    NotFound { what: String },

    #[error("Request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Server reported error {code}: {message}")]
    Server { code: i32, message: String },

    #[error("Response decode error: {message}")]
    Decode { message: String },

    #[error("Response envelope had no data field")]
    EmptyData,
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Invalid base URL '{url}': {message}")]
    BadBaseUrl { url: String, message: String },

    #[error("Environment variable not set: {var}")]
    EnvVarMissing { var: String },
}

/// A type alias for results using the top-level `SurveyscopeError`.
pub type Result<T> = std::result::Result<T, SurveyscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_api() {
        let err = SurveyscopeError::Api(ApiError::Connection {
            message: "connection refused".into(),
        });
        assert_eq!(
            err.to_string(),
            "API error: Connection to survey platform failed: connection refused"
        );
    }

    #[test]
    fn test_error_display_server_code() {
        let err = SurveyscopeError::Api(ApiError::Server {
            code: 4001,
            message: "survey deleted".into(),
        });
        assert_eq!(
            err.to_string(),
            "API error: Server reported error 4001: survey deleted"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = SurveyscopeError::Config(ConfigError::BadBaseUrl {
            url: "not a url".into(),
            message: "relative URL without a base".into(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid base URL 'not a url': relative URL without a base"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SurveyscopeError = io_err.into();
        assert!(matches!(err, SurveyscopeError::Io(_)));
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SurveyscopeError = serde_err.into();
        assert!(matches!(err, SurveyscopeError::Serialization(_)));
    }

    #[test]
    fn test_api_error_variants() {
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Not logged in or session expired"
        );
        assert_eq!(
            ApiError::NotFound {
                what: "survey 42".into()
            }
            .to_string(),
            "Resource not found: survey 42"
        );
        assert_eq!(
            ApiError::Http {
                status: 502,
                body: "bad gateway".into()
            }
            .to_string(),
            "Request failed with HTTP 502: bad gateway"
        );
    }
}
