/*
[INPUT]:  Error sources (HTTP, API error bodies, serialization, validation)
[OUTPUT]: Structured error types with status and classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::types::{ErrorBody, ErrorType};

/// Documented error returned by the Column API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub error_type: ErrorType,
    pub code: String,
    pub message: String,
    pub documentation_url: String,
    pub details: HashMap<String, String>,
    pub status: StatusCode,
    pub url: String,
}

impl ApiError {
    pub fn from_body(body: ErrorBody, status: StatusCode, url: impl Into<String>) -> Self {
        Self {
            error_type: body.error_type,
            code: body.code,
            message: body.message,
            documentation_url: body.documentation_url,
            details: body.details,
            status,
            url: url.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Sorted so the message is stable across runs
        let details: BTreeMap<_, _> = self.details.iter().collect();
        write!(
            f,
            "Error calling {}, {}: {} - {:?}, Server returned status: {}",
            self.url,
            self.error_type,
            self.code,
            details,
            self.status.as_u16()
        )
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the Column client
#[derive(Error, Debug)]
pub enum ColumnError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a documented error response
    #[error(transparent)]
    Api(Box<ApiError>),

    /// Status the API does not document
    #[error("Unhandled status code {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// API key has no recognised environment prefix
    #[error("Invalid API key: expected a `test_` or `live_` prefix")]
    InvalidApiKey,

    /// Entity body carried a `type` this crate does not model
    #[error("Unhandled entity type: {0}")]
    UnknownEntityType(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Blocking runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ColumnError {
    /// HTTP status associated with the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ColumnError::Api(err) => Some(err.status),
            ColumnError::UnexpectedStatus { status, .. } => Some(*status),
            ColumnError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if error indicates an authentication or authorization failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            ColumnError::InvalidApiKey => true,
            ColumnError::Api(err) => {
                err.error_type == ErrorType::AuthenticationError
                    || matches!(err.status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            }
            _ => false,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|status| status.is_server_error())
    }

    /// The documented API error, if this is one
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ColumnError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Create an API error from status code and body fields
    pub fn api_error(
        status: StatusCode,
        error_type: ErrorType,
        code: impl Into<String>,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        ColumnError::Api(Box::new(ApiError {
            error_type,
            code: code.into(),
            message: message.into(),
            documentation_url: String::new(),
            details: HashMap::new(),
            status,
            url: url.into(),
        }))
    }
}

/// Result type alias for Column operations
pub type Result<T> = std::result::Result<T, ColumnError>;
