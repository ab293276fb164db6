// src/api/schemas.rs
//! OpenAPI views of the `{success, data, error}` envelope written by
//! [`crate::shared::api::ApiResponse`].
use serde::Serialize;
use utoipa::ToSchema;

/// `2xx` body carrying a topic, a comment or a list of either.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of every rejected forum request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// Stable code plus a message meant for people.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `EMPTY_TITLE`, `EMPTY_DESCRIPTION`, `TITLE_TOO_LONG`,
    /// `EMPTY_USERNAME`, `EMPTY_CONTENT`, `TOPIC_NOT_FOUND`,
    /// `COMMENT_NOT_FOUND`, `FORBIDDEN`, `AUTHOR_MISMATCH`,
    /// `MISSING_AUTH_HEADER`, `INVALID_TOKEN`, `INVALID_TOKEN_TYPE`,
    /// `VALIDATION_ERROR` or `INTERNAL_ERROR`.
    #[schema(example = "COMMENT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Comment not found")]
    pub message: String,
}
