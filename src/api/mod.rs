//! # API Module
//!
//! HTTP endpoints of the playlist service. Every handler follows the same
//! shape: extract and validate the query/body, bind a
//! [`PlaylistManager`] to the caller's token, run exactly one manager
//! operation and return its result as JSON.
//!
//! Errors are never handled inside handlers. They bubble up as
//! [`ApiError`], which maps the [`PlaylistError`] taxonomy to a status code:
//!
//! | error | status |
//! |---|---|
//! | `InvalidToken` | 401 |
//! | `TrackLimitExceeded`, `NotEnoughTracks`, `InvalidRequest` | 400 |
//! | `Upstream`, `Http` | 500 |
//!
//! Extractor rejections (malformed JSON, missing query fields, non-numeric
//! path ids) are turned into `InvalidRequest`, so they share the 400 envelope.
//!
//! ## Endpoints
//!
//! All routes are mounted under [`crate::server::API_PREFIX`]; the token is
//! passed as the `token` query parameter.
//!
//! - [`health`] - `GET /health`
//! - [`validate_token`] - `GET /token/validate`
//! - [`current_user`], [`user`] - `GET /users/me`, `GET /users/{id}`
//! - [`playlists`], [`tracks`] - `GET /playlists`, `GET /tracks`
//! - [`playlist_track_ids`] - `GET /playlists/{id}/track-ids`
//! - [`unplayed_track_ids`] - `GET /playlists/unplayed/track-ids`
//! - [`create_unplayed_playlist`] - `POST /playlists/unplayed`
//! - [`merge_playlists`] - `POST /playlists/merge`
//! - [`create_random_playlist`] - `POST /playlists/random`
//! - [`delete_playlist`] - `DELETE /playlists/{id}`

mod error;
mod health;
mod playlists;
mod token;
mod users;

use std::sync::Arc;

use serde::Deserialize;

pub use error::ApiError;
pub use health::health;
pub use playlists::{
    create_random_playlist, create_unplayed_playlist, delete_playlist, merge_playlists,
    playlist_track_ids, playlists, tracks, unplayed_track_ids,
};
pub use token::validate_token;
pub use users::{current_user, user};

use crate::{
    config,
    error::PlaylistError,
    management::PlaylistManager,
    soundcloud::Connect,
    types::{PlaylistCreateOptions, UserId, Visibility},
};

/// State shared by all handlers. Immutable once the server is running.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn Connect>,
    pub track_limit: usize,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connect>) -> Self {
        Self {
            connector,
            track_limit: config::DEFAULT_TRACK_LIMIT,
        }
    }

    pub fn with_track_limit(mut self, track_limit: usize) -> Self {
        self.track_limit = track_limit;
        self
    }

    /// Binds a fresh manager to the caller's token.
    pub async fn manager(&self, token: &str) -> Result<PlaylistManager, PlaylistError> {
        PlaylistManager::connect_with_token(token, |t| self.connector.connect(t)).await
    }

    fn create_options(
        &self,
        title: Option<String>,
        default_title: &str,
        visibility: Visibility,
    ) -> PlaylistCreateOptions {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| default_title.to_string());

        PlaylistCreateOptions::new(title)
            .visibility(visibility)
            .track_limit(self.track_limit)
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub token: String,
    pub user_id: Option<UserId>,
}
