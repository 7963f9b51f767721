//! Typed error handling for the catalog service
//!
//! Every failure on a request path is a [`CatalogError`]. Handlers return it
//! directly and axum turns it into the `{"status": "error", "error": ...}`
//! body through [`IntoResponse`].
//!
//! # Error Categories
//!
//! - [`QueryError`]: untrusted listing parameters that could not be decoded
//! - [`StorageError`]: catalog store failures (never leaked to the client)
//! - [`ProductError`]: single-product operations (lookup, bodies, ids)
//! - [`ConfigError`]: configuration loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match QuerySpec::decode(&params, &config) {
//!     Ok(spec) => run(spec).await,
//!     Err(CatalogError::Query(QueryError::MalformedFilter { raw, .. })) => {
//!         tracing::warn!(%raw, "rejecting listing request");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Message returned to clients for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The main error type for the catalog service
#[derive(Debug)]
pub enum CatalogError {
    /// Listing parameters could not be decoded
    Query(QueryError),

    /// The catalog store failed
    Storage(StorageError),

    /// Single-product operation errors
    Product(ProductError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Query(e) => write!(f, "{}", e),
            CatalogError::Storage(e) => write!(f, "{}", e),
            CatalogError::Product(e) => write!(f, "{}", e),
            CatalogError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Query(e) => Some(e),
            CatalogError::Storage(e) => Some(e),
            CatalogError::Product(e) => Some(e),
            CatalogError::Config(e) => Some(e),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: &'static str,
    /// Human-readable message, generic for server errors
    pub error: String,
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Query(_) => StatusCode::BAD_REQUEST,
            CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Product(e) => e.status_code(),
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Query(e) => e.error_code(),
            CatalogError::Storage(e) => e.error_code(),
            CatalogError::Product(e) => e.error_code(),
            CatalogError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the error is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Convert to an error response
    ///
    /// Server errors are replaced by [`INTERNAL_ERROR_MESSAGE`] so that no
    /// store or config detail reaches the caller.
    pub fn to_response(&self) -> ErrorResponse {
        let error = if self.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        ErrorResponse {
            status: "error",
            error,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised while decoding listing parameters
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The `query` parameter is not a usable filter object
    MalformedFilter { raw: String, message: String },

    /// A pagination parameter is not a positive integer (strict mode only)
    InvalidParameter { name: String, value: String },

    /// The query string itself could not be read
    InvalidQueryString { message: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MalformedFilter { message, .. } => {
                write!(f, "Malformed filter expression: {}", message)
            }
            QueryError::InvalidParameter { name, value } => {
                write!(
                    f,
                    "Invalid value '{}' for parameter '{}': expected a positive integer",
                    value, name
                )
            }
            QueryError::InvalidQueryString { message } => {
                write!(f, "Invalid query string: {}", message)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::MalformedFilter { .. } => "MALFORMED_FILTER",
            QueryError::InvalidParameter { .. } => "INVALID_PARAMETER",
            QueryError::InvalidQueryString { .. } => "INVALID_QUERY_STRING",
        }
    }
}

impl From<QueryError> for CatalogError {
    fn from(err: QueryError) -> Self {
        CatalogError::Query(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the catalog store
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Backend could not be reached or is in a failed state
    Unavailable { backend: String, message: String },

    /// The store call exceeded the configured deadline
    Timeout { backend: String, after_ms: u64 },

    /// The backend rejected or failed the query
    QueryFailed { backend: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable { backend, message } => {
                write!(f, "Storage backend '{}' is unavailable: {}", backend, message)
            }
            StorageError::Timeout { backend, after_ms } => {
                write!(f, "Storage backend '{}' timed out after {}ms", backend, after_ms)
            }
            StorageError::QueryFailed { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Unavailable { .. } => "STORE_UNAVAILABLE",
            StorageError::Timeout { .. } => "STORE_TIMEOUT",
            StorageError::QueryFailed { .. } => "STORE_QUERY_FAILED",
        }
    }
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        CatalogError::Storage(err)
    }
}

// =============================================================================
// Product Errors
// =============================================================================

/// Errors related to single-product operations
#[derive(Debug, Clone, PartialEq)]
pub enum ProductError {
    /// No product with this id
    NotFound { id: String },

    /// Path id is not a UUID
    InvalidId { id: String },

    /// Request body is not a JSON object
    InvalidBody { message: String },
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::NotFound { id } => write!(f, "Product '{}' not found", id),
            ProductError::InvalidId { id } => write!(f, "Invalid product id: '{}'", id),
            ProductError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for ProductError {}

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound { .. } => StatusCode::NOT_FOUND,
            ProductError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ProductError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ProductError::NotFound { .. } => "PRODUCT_NOT_FOUND",
            ProductError::InvalidId { .. } => "INVALID_PRODUCT_ID",
            ProductError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl From<ProductError> for CatalogError {
    fn from(err: ProductError) -> Self {
        CatalogError::Product(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CatalogError {
    fn from(err: ConfigError) -> Self {
        CatalogError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
