//! Error handling for the API.
//!
//! One error type covers the whole request path. Internal details (database
//! errors in particular) are logged via `tracing` and never sent to clients;
//! the response body always follows the `{success, message, errors?}`
//! envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// Which of the two paired listing statements failed.
///
/// The data statement and the count statement share one predicate list but
/// execute separately; errors carry this tag so a failure can be traced to
/// the statement that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// The windowed, ordered row-fetch statement.
    Data,
    /// The aggregate COUNT statement.
    Count,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Count => write!(f, "count"),
        }
    }
}

/// API error with sanitized responses and logged internals.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found.
    NotFound {
        /// Resource type, e.g. "Product".
        resource: String,
        /// Identifier that was not found.
        id: Option<String>,
    },

    /// 400 Bad Request, invalid caller input.
    BadRequest {
        /// User-facing message.
        message: String,
    },

    /// 400 Bad Request with a per-field error list.
    ValidationFailed {
        /// User-facing validation errors.
        errors: Vec<String>,
    },

    /// 500, one of the paired listing statements failed.
    Query {
        /// Statement that failed.
        kind: QueryKind,
        /// Store error, logged but not exposed.
        internal: DbErr,
    },

    /// 500, a single-statement database operation failed.
    Database {
        /// Store error, logged but not exposed.
        internal: DbErr,
    },
}

impl ApiError {
    /// 404 constructor.
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// 400 constructor.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// 400 constructor with a field-error list.
    #[must_use]
    pub fn validation_failed(errors: Vec<String>) -> Self {
        Self::ValidationFailed { errors }
    }

    /// Tag a store error with the listing statement that produced it.
    #[must_use]
    pub fn query(kind: QueryKind, internal: DbErr) -> Self {
        Self::Query { kind, internal }
    }

    /// Wrap a store error from a single-statement operation.
    #[must_use]
    pub fn database(internal: DbErr) -> Self {
        Self::Database { internal }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } | Self::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            Self::Query { .. } | Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message with internals stripped.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => id.as_ref().map_or_else(
                || format!("{resource} not found"),
                |id| format!("{resource} with ID '{id}' not found"),
            ),
            Self::BadRequest { message } => message.clone(),
            Self::ValidationFailed { errors } => {
                if errors.len() == 1 {
                    errors[0].clone()
                } else {
                    "Validation failed".to_string()
                }
            }
            Self::Query { .. } | Self::Database { .. } => {
                "A database error occurred".to_string()
            }
        }
    }

    /// Log internal details; nothing here reaches the response body.
    fn log_internal(&self) {
        match self {
            Self::Query { kind, internal } => {
                tracing::error!(statement = %kind, error = ?internal, "listing statement failed");
            }
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "database operation failed");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error envelope sent to clients.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let body = match &self {
            Self::ValidationFailed { errors } => ErrorBody {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            },
            _ => ErrorBody {
                success: false,
                message: self.user_message(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Database { internal: err }
    }
}
