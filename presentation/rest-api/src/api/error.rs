use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

fn error_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "ValidationError",
        StatusCode::NOT_FOUND => "NotFound",
        StatusCode::METHOD_NOT_ALLOWED => "MethodNotAllowed",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UnsupportedMediaType",
        status if status.is_client_error() => "BadRequest",
        _ => "InternalError",
    }
}

/// Renders errors raised outside the handlers (payload parsing, content type
/// negotiation, unknown routes, unsupported methods) as `ErrorResponse` JSON.
pub async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(status = %status, error = %err, "request failed");
    } else {
        tracing::debug!(status = %status, error = %err, "request rejected");
    }

    poem::web::Json(ErrorResponse::new(error_name(status), err.to_string()))
        .with_status(status)
        .into_response()
}
