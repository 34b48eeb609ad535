//! Typed error handling for the registry service
//!
//! The error taxonomy of the measurable contract is small: **NotFound** (id
//! absent on get/update/delete), **Conflict** (duplicate id on booking
//! create) and **BadRequest** (malformed numeric id in a path segment).
//! `Unchanged` is deliberately not here — it is a non-error no-op signal and
//! travels as [`UpdateOutcome`](crate::core::registry::UpdateOutcome).
//!
//! Every error knows its HTTP status code and a stable error code, and
//! renders itself as a JSON [`ErrorResponse`] through axum's `IntoResponse`.

use crate::core::registry::Resource;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the service
#[derive(Debug)]
pub enum CrmError {
    /// Registry lookup/insert errors (CRUD operations)
    Registry(RegistryError),

    /// HTTP request shape errors
    Request(RequestError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (poisoned locks; should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrmError::Registry(e) => write!(f, "{}", e),
            CrmError::Request(e) => write!(f, "{}", e),
            CrmError::Config(e) => write!(f, "{}", e),
            CrmError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CrmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrmError::Registry(e) => Some(e),
            CrmError::Request(e) => Some(e),
            CrmError::Config(e) => Some(e),
            CrmError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl CrmError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CrmError::Registry(e) => e.status_code(),
            CrmError::Request(e) => e.status_code(),
            CrmError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CrmError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CrmError::Registry(e) => e.error_code(),
            CrmError::Request(e) => e.error_code(),
            CrmError::Config(_) => "CONFIG_ERROR",
            CrmError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for CrmError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Registry Errors
// =============================================================================

/// Errors raised by registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No record with the given id
    NotFound { resource: &'static str, id: String },

    /// A create collided with an existing identifier
    Conflict { resource: &'static str, id: String },
}

impl RegistryError {
    /// NotFound for a registry-held resource type
    pub fn not_found<E: Resource>(id: u64) -> Self {
        RegistryError::NotFound {
            resource: E::resource_name_singular(),
            id: id.to_string(),
        }
    }

    /// NotFound for resources with opaque string ids (bookings)
    pub fn not_found_named(resource: &'static str, id: &str) -> Self {
        RegistryError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Conflict on duplicate-id create
    pub fn conflict(resource: &'static str, id: &str) -> Self {
        RegistryError::Conflict {
            resource,
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::NotFound { .. } => "NOT_FOUND",
            RegistryError::Conflict { .. } => "CONFLICT",
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            RegistryError::Conflict { resource, id } => {
                write!(f, "{} with id '{}' already exists", resource, id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<RegistryError> for CrmError {
    fn from(err: RegistryError) -> Self {
        CrmError::Registry(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the shape of HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// A path segment that should be a numeric id failed to parse
    InvalidId { value: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidId { value } => {
                write!(f, "Invalid numeric id: '{}'", value)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidId { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidId { .. } => "INVALID_ID",
        }
    }
}

impl From<RequestError> for CrmError {
    fn from(err: RequestError) -> Self {
        CrmError::Request(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found
    FileNotFound { path: String },

    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CrmError {
    fn from(err: ConfigError) -> Self {
        CrmError::Config(err)
    }
}

impl From<serde_yaml::Error> for CrmError {
    fn from(err: serde_yaml::Error) -> Self {
        CrmError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for CrmError {
    fn from(err: std::io::Error) -> Self {
        CrmError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type aliases
// =============================================================================

/// Result of a raw registry operation
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A specialized Result type for service and handler operations
pub type CrmResult<T> = Result<T, CrmError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::not_found_named("customer", "123");
        assert!(err.to_string().contains("customer"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_not_found_status_code() {
        let err = RegistryError::not_found_named("order", "223");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_conflict_status_code() {
        let err = RegistryError::conflict("booking", "B-1");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[test]
    fn test_invalid_id_is_bad_request() {
        let err: CrmError = RequestError::InvalidId {
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_ID");
    }

    #[test]
    fn test_crm_error_conversion() {
        let err: CrmError = RegistryError::not_found_named("product", "323").into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let response = err.to_response();
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.message.contains("product"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound {
            path: "/etc/crm.yaml".to_string(),
        };
        assert!(err.to_string().contains("/etc/crm.yaml"));
    }

    #[test]
    fn test_internal_error_is_500() {
        let err = CrmError::Internal("lock poisoned".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
