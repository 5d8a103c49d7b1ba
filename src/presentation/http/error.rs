use crate::application::{ApplicationResult, error::ApplicationError};
use crate::context::RequestContext;
use crate::domain::errors::ErrorKind;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Maps by error kind only. Store failures never expose their cause.
    pub fn from_error(err: ApplicationError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::new(StatusCode::NOT_FOUND, "article not found"),
            ErrorKind::Validation => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ErrorKind::Persistence => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    /// Logs the full error chain against the request id, then maps it to a
    /// response.
    fn into_http(self, ctx: &RequestContext) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self, ctx: &RequestContext) -> HttpResult<T> {
        self.map_err(|err| {
            match err.kind() {
                ErrorKind::Persistence => {
                    tracing::error!(request_id = %ctx.request_id(), error = %err, "request failed");
                }
                ErrorKind::NotFound | ErrorKind::Validation => {
                    tracing::warn!(request_id = %ctx.request_id(), error = %err, "request rejected");
                }
            }
            HttpError::from_error(err)
        })
    }
}
