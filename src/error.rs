use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::models::FieldError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("a movie titled '{0}' is already in the catalog")]
    DuplicateTitle(String),
    #[error("no movie titled '{0}' in the catalog")]
    NotFound(String),
    #[error("invalid form input")]
    Validation(Vec<FieldError>),
    #[error("malformed candidate payload: {0}")]
    Candidate(String),
    #[error("metadata provider request failed: {0}")]
    Upstream(#[source] reqwest::Error),
    #[error("metadata provider response is missing expected fields: {0}")]
    UpstreamSchema(#[source] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Candidate(err.to_string())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateTitle(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Candidate(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::UpstreamSchema(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let mut resp = Html(crate::templates::error_page(self.to_string())).into_response();
        *resp.status_mut() = self.status();
        resp
    }
}

pub type AppResult<T> = Result<T, AppError>;
