use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiError {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "not logged in")
}

pub fn internal_error(err: anyhow::Error) -> Response {
    eprintln!("internal error: {:?}", err);
    error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
