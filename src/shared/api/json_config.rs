// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Malformed or mistyped JSON bodies answer with the standard envelope
/// instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().limit(64 * 1024).error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!("Rejected JSON payload: {}", message);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        content: String,
    }

    #[post("/echo")]
    async fn echo(_payload: web::Json<Payload>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_json_returns_validation_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"content\": 42}")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
