// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// JSON envelope shared by every forum endpoint.
///
/// The server builds it through the associated constructors below; the
/// client decodes the same shape and unwraps it with [`ApiResponse::into_data`].
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Unwrap a decoded envelope. A successful envelope without data is
    /// reported as an error since every data-bearing endpoint fills it.
    pub fn into_data(self) -> Result<T, ApiError> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (_, _, Some(error)) => Err(error),
            _ => Err(ApiError {
                code: "EMPTY_RESPONSE".to_string(),
                message: "Response carried no data".to_string(),
            }),
        }
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
