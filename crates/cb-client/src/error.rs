//! Error types for cybozu-client.

/// Result type alias for cybozu-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cybozu-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a `MissingRequiredOption` error naming the option.
    pub fn missing_option(option: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredOption {
            option: option.into(),
        })
    }

    /// Returns true if this is an authentication-rejection error (HTTP 401/403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::FailedAuth { .. })
    }

    /// Returns true if this is a configuration-resolution error.
    pub fn is_missing_option(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingRequiredOption { .. })
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required configuration option is absent for the selected auth mode.
    /// Raised at configuration resolution time only, never later.
    #[error("Missing required option: {option}")]
    MissingRequiredOption { option: String },

    /// The server rejected the request's credentials (HTTP 401/403).
    #[error("Authentication failed: HTTP {status}")]
    FailedAuth { status: u16 },

    /// Structured Cybozu API error response ({code, id, message} body).
    #[error("Cybozu API error: {code} - {message}")]
    CybozuApi { code: String, message: String },

    /// Any other non-2xx HTTP response.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
