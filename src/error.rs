//! String Analyzer error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// String Analyzer error type
#[derive(Error, Debug)]
pub enum Error {
    /// A required request field is absent or null
    #[error("Missing \"{0}\" field in request body")]
    MissingField(String),

    /// A request field is present but has the wrong JSON type
    #[error("Invalid data type for \"{field}\" (must be {expected})")]
    InvalidType { field: String, expected: String },

    /// A query-string filter parameter failed validation
    #[error("Invalid value for {name} (must be {expected})")]
    InvalidParameter { name: String, expected: String },

    /// Request could not be decoded (body or query string)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// A record with the same content hash is already stored
    #[error("String already exists in the system")]
    AlreadyExists,

    /// No record for the derived content hash
    #[error("String does not exist in the system")]
    NotFound,

    /// Natural-language query parameter absent or blank
    #[error("Missing query parameter")]
    MissingQuery,

    /// Natural-language query could not be turned into filters
    #[error("Unable to parse natural language query")]
    UnparseableQuery(String),

    /// Parsed filters contradict each other
    #[error("Query parsed but resulted in conflicting filters")]
    ConflictingFilters { min_length: i64, max_length: i64 },

    /// A query rule could not be built
    #[error("Invalid query rule '{name}': {reason}")]
    InvalidRule { name: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for String Analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error maps to at the API boundary
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::InvalidParameter { .. }
            | Self::BadRequest(_)
            | Self::MissingQuery
            | Self::UnparseableQuery(_) => StatusCode::BAD_REQUEST,
            Self::InvalidType { .. } | Self::ConflictingFilters { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidRule { .. } | Self::Config(_) | Self::Io(_) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidType { .. } => "INVALID_TYPE",
            Self::InvalidParameter { .. } => "INVALID_PARAMETER",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::AlreadyExists => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::MissingQuery => "MISSING_QUERY",
            Self::UnparseableQuery(_) => "UNPARSEABLE_QUERY",
            Self::ConflictingFilters { .. } => "CONFLICTING_FILTERS",
            Self::InvalidRule { .. } | Self::Config(_) | Self::Io(_) | Self::Serialization(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::UnparseableQuery(reason) => Some(reason.clone()),
            Self::ConflictingFilters {
                min_length,
                max_length,
            } => Some(format!(
                "min_length ({}) cannot be greater than max_length ({})",
                min_length, max_length
            )),
            _ => None,
        }
    }
}

/// JSON error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Error> for ApiError {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
            details: err.details(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ApiError::from(&self))).into_response()
    }
}
