use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use crate::{
    api::{ApiError, AppState, TokenQuery},
    types::{User, UserId},
};

pub async fn current_user(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<User>, ApiError> {
    let Query(query) = query?;
    let manager = state.manager(&query.token).await?;
    Ok(Json(manager.get_user(None).await?))
}

pub async fn user(
    State(state): State<AppState>,
    user_id: Result<Path<UserId>, PathRejection>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(user_id) = user_id?;
    let Query(query) = query?;
    let manager = state.manager(&query.token).await?;
    Ok(Json(manager.get_user(Some(user_id)).await?))
}
