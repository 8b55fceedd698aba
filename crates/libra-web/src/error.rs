//! Error pages
//!
//! Data access errors are mapped to status codes and rendered as HTML.
//! Driver details are logged, never shown.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use libra_data::QueryError;

use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Bad form or query input (400)
    #[error("{0}")]
    Validation(String),

    /// Requested record does not exist (404)
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Query(err) => match err {
                QueryError::NotFound { .. } => StatusCode::NOT_FOUND,
                QueryError::ConstraintViolation { .. } => StatusCode::BAD_REQUEST,
                QueryError::ConnectionFailure { .. } => StatusCode::SERVICE_UNAVAILABLE,
                QueryError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = views::error_page(status, &self.to_string());
        (status, Html(body)).into_response()
    }
}
