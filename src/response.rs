use serde::Serialize;
use utoipa::ToSchema;

use crate::filtering::Pagination;

/// Success envelope wrapping every response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`; error responses use the error envelope instead.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Payload.
    pub data: T,
    /// Present only on paginated listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Plain success envelope.
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            pagination: None,
        }
    }

    /// Success envelope carrying pagination metadata.
    pub fn paginated(data: T, pagination: Pagination, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            pagination: Some(pagination),
        }
    }
}
