use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::PlaylistError, types::ApiResponse, warning};

/// Wraps a [`PlaylistError`] so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub PlaylistError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PlaylistError::InvalidToken => StatusCode::UNAUTHORIZED,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warning!("{}", self.0);
        }

        (status, Json(ApiResponse::failed(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<PlaylistError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Extractor rejections are shape errors: 400 with the usual envelope.

impl From<JsonRejection> for PlaylistError {
    fn from(rejection: JsonRejection) -> Self {
        PlaylistError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for PlaylistError {
    fn from(rejection: QueryRejection) -> Self {
        PlaylistError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for PlaylistError {
    fn from(rejection: PathRejection) -> Self {
        PlaylistError::InvalidRequest(rejection.body_text())
    }
}
