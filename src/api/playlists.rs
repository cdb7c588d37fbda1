use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::Deserialize;

use crate::{
    api::{ApiError, AppState, TokenQuery, UserQuery},
    error::PlaylistError,
    info,
    types::{
        ApiResponse, MergePlaylistsRequest, PlaylistId, PlaylistSummary, RandomPlaylistRequest,
        TrackId, TrackSummary, UnplayedTracksRequest,
    },
    utils,
};

const UNPLAYED_TITLE: &str = "Unplayed Tracks";
const MERGED_TITLE: &str = "Merged Playlist";
const RANDOM_TITLE: &str = "Random Playlist";

#[derive(Debug, Deserialize)]
pub struct UnplayedQuery {
    #[serde(default)]
    pub token: String,
    pub base_playlist_id: PlaylistId,
    /// Comma-separated playlist ids, e.g. `12,34`.
    #[serde(default)]
    pub played_playlist_ids: Option<String>,
}

pub async fn playlists(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<Vec<PlaylistSummary>>, ApiError> {
    let Query(query) = query?;
    let manager = state.manager(&query.token).await?;
    Ok(Json(manager.get_playlists(query.user_id).await?))
}

pub async fn tracks(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<Vec<TrackSummary>>, ApiError> {
    let Query(query) = query?;
    let manager = state.manager(&query.token).await?;
    Ok(Json(manager.get_tracks(query.user_id).await?))
}

pub async fn playlist_track_ids(
    State(state): State<AppState>,
    playlist_id: Result<Path<PlaylistId>, PathRejection>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<Vec<TrackId>>, ApiError> {
    let Path(playlist_id) = playlist_id?;
    let Query(query) = query?;
    let manager = state.manager(&query.token).await?;
    Ok(Json(manager.get_track_ids(playlist_id).await?))
}

pub async fn unplayed_track_ids(
    State(state): State<AppState>,
    query: Result<Query<UnplayedQuery>, QueryRejection>,
) -> Result<Json<Vec<TrackId>>, ApiError> {
    let Query(query) = query?;
    let played = match query.played_playlist_ids.as_deref() {
        Some(ids) => utils::parse_id_list(ids).map_err(PlaylistError::InvalidRequest)?,
        None => Vec::new(),
    };

    let manager = state.manager(&query.token).await?;
    let unplayed = manager
        .get_unplayed_track_ids(query.base_playlist_id, &played)
        .await?;
    Ok(Json(unplayed))
}

pub async fn create_unplayed_playlist(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    request: Result<Json<UnplayedTracksRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Query(query) = query?;
    let Json(request) = request?;
    let options = state.create_options(request.title, UNPLAYED_TITLE, request.visibility);
    let manager = state.manager(&query.token).await?;
    let response = manager
        .create_unplayed_tracks_playlist(
            request.base_playlist_id,
            &request.played_playlist_ids,
            &options,
        )
        .await?;

    info!("Created unplayed tracks playlist '{}'", options.title);
    Ok(Json(response))
}

pub async fn merge_playlists(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    request: Result<Json<MergePlaylistsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Query(query) = query?;
    let Json(request) = request?;
    let options = state.create_options(request.title, MERGED_TITLE, request.visibility);
    let manager = state.manager(&query.token).await?;
    let response = manager
        .merge_playlists(&request.playlist_ids, &options)
        .await?;

    info!(
        "Merged {} playlists into '{}'",
        request.playlist_ids.len(),
        options.title
    );
    Ok(Json(response))
}

pub async fn create_random_playlist(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    request: Result<Json<RandomPlaylistRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Query(query) = query?;
    let Json(request) = request?;
    let options = state.create_options(request.title, RANDOM_TITLE, request.visibility);
    let manager = state.manager(&query.token).await?;
    let response = manager
        .create_random_playlist(request.base_playlist_id, request.track_count, &options)
        .await?;

    info!(
        "Created random playlist '{}' with {} tracks",
        options.title, request.track_count
    );
    Ok(Json(response))
}

pub async fn delete_playlist(
    State(state): State<AppState>,
    playlist_id: Result<Path<PlaylistId>, PathRejection>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Path(playlist_id) = playlist_id?;
    let Query(query) = query?;
    let manager = state.manager(&query.token).await?;
    let response = manager.delete_playlist(playlist_id).await?;

    info!("Deleted playlist {}", playlist_id);
    Ok(Json(response))
}
