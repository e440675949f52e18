use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use crate::store::StoreError;

/// Everything a handler can fail with, rendered as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::Validation(_) | StoreError::Conflict(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{self}\n"),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
