/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response so handlers can return it
 * directly. The response body is JSON:
 *
 * ```json
 * {
 *   "error": "invalid credentials",
 *   "status": 401
 * }
 * ```
 *
 * Server faults (500-class) are logged with their full cause here, at the
 * single point where they leave the handler stack.
 */
use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        let message = self.public_message();
        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(|_| {
                format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16())
            })))
            .unwrap_or_else(|_| {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_status() {
        let response = ApiError::unauthorized("invalid credentials").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_into_response_is_json() {
        let response = ApiError::validation("email must not be empty").into_response();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert_eq!(content_type, "application/json");
    }
}
