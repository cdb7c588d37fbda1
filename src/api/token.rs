use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{
    api::{ApiError, AppState, TokenQuery},
    error::PlaylistError,
    types::ApiResponse,
};

/// Reports whether SoundCloud accepts the token. A rejected token is a
/// successful request with `success: false`, not a 401.
pub async fn validate_token(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Query(query) = query?;
    match state.manager(&query.token).await {
        Ok(_) => Ok(Json(ApiResponse::ok("Token is valid"))),
        Err(PlaylistError::InvalidToken) => Ok(Json(ApiResponse::failed("Token is invalid"))),
        Err(e) => Err(e.into()),
    }
}
