use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::schema::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Content(serde_json::Error),
    Validation(ValidationErrors),
    /// A generated content schema failed to compile.
    Schema(String),
    UnknownLayout(String),
    BadRequest(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Content(e) => write!(f, "Content error: {e}"),
            AppError::Validation(e) => write!(f, "Validation error: {e}"),
            AppError::Schema(msg) => write!(f, "Schema error: {msg}"),
            AppError::UnknownLayout(id) => write!(f, "Unknown layout: {id}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::UnknownLayout(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Template(_) | AppError::Content(_) | AppError::Schema(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Every not-found path looks the same to the client.
            AppError::NotFound => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("Not found"),
            AppError::UnknownLayout(id) => HttpResponse::NotFound()
                .json(serde_json::json!({ "error": format!("Unknown layout: {id}") })),
            AppError::Validation(errors) => HttpResponse::UnprocessableEntity()
                .json(serde_json::json!({ "error": "Validation failed", "issues": errors.issues() })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": msg })),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Content(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}

/// Render an Askama template into an HTML response.
pub fn render(tmpl: impl askama::Template) -> Result<HttpResponse, AppError> {
    let html = tmpl.render()?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}
