// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::presentation::http::views::View;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use minijinja::context;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, errors.to_string())
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.".into())
            }
            ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::new(StatusCode::NOT_FOUND, msg)
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => {
                tracing::error!(error = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.".into())
            }
            ApplicationError::Domain(domain_err) => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    const fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        View::new("error.html", context! { title => title, message => self.message })
            .with_status(self.status)
            .into_response()
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        tracing::debug!(error = %err, "rejected multipart body");
        Self::new(err.status(), err.body_text())
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
