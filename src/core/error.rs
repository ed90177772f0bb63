use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::templates::TemplateError;

/// Failures talking to the registration database.
///
/// Each step of the insert keeps its own variant so the log says where it broke.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Prepare failed: {0}")]
    Prepare(#[source] sqlx::Error),

    #[error("Execute failed: {0}")]
    Execute(#[source] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Why a submission was not stored. Never turned into an HTTP response:
/// the registration service collapses it into an alert on the page.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Failures that abort page rendering
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Template(ref e) => {
                tracing::error!("Template error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Error {code}</title></head>
<body><h1>Error {code}</h1><p>{message}</p></body>
</html>"#,
            code = status.as_u16(),
            message = message
        );

        (status, Html(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_maps_to_500() {
        let response =
            AppError::Template(TemplateError::NotFound("index.html".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_converts_into_submission_error() {
        let err: SubmissionError = DatabaseError::Execute(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, SubmissionError::Database(DatabaseError::Execute(_))));
    }
}
