//! # SoundCloud Integration Module
//!
//! The playlist service only needs a handful of operations from SoundCloud's
//! private API. They are described by the [`SoundCloudApi`] trait so the
//! derivation logic in [`crate::management`] never touches HTTP directly and
//! can be exercised against an in-memory implementation.
//!
//! A client is always bound to a single caller's token. [`Connect`] produces
//! such a client for every incoming request; nothing is shared or cached
//! between requests.
//!
//! ```text
//! HTTP handler ── Connect::connect(token) ──> Box<dyn SoundCloudApi>
//!                                                   │
//!                               PlaylistManager ────┘
//!                                                   │
//!                                       SoundCloud API v2 (reqwest)
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - current user, also used for token validation
//! - `GET /users/{id}` - any user
//! - `GET /users/{id}/playlists`, `GET /users/{id}/tracks`
//! - `GET /playlists/{id}` - playlist with its track references
//! - `POST /playlists`, `DELETE /playlists/{id}`

mod client;

use async_trait::async_trait;

pub use client::{SoundCloudClient, SoundCloudConnector};

use crate::{
    error::Result,
    types::{PlaylistId, PlaylistSummary, TrackId, TrackSummary, User, UserId, Visibility},
};

/// Operations the service consumes from SoundCloud, on behalf of one token.
#[async_trait]
pub trait SoundCloudApi: Send + Sync {
    /// Whether the bound token is accepted by SoundCloud.
    async fn validate_token(&self) -> Result<bool>;

    async fn get_me(&self) -> Result<User>;

    async fn get_user(&self, user_id: UserId) -> Result<User>;

    async fn get_user_playlists(&self, user_id: UserId) -> Result<Vec<PlaylistSummary>>;

    async fn get_user_tracks(&self, user_id: UserId) -> Result<Vec<TrackSummary>>;

    /// Track ids of a playlist, in playlist order.
    async fn get_playlist_track_ids(&self, playlist_id: PlaylistId) -> Result<Vec<TrackId>>;

    /// Creates a playlist and returns its id.
    async fn create_playlist(
        &self,
        visibility: Visibility,
        title: &str,
        track_ids: &[TrackId],
    ) -> Result<PlaylistId>;

    async fn delete_playlist(&self, playlist_id: PlaylistId) -> Result<()>;
}

/// Produces a [`SoundCloudApi`] bound to a caller-supplied token.
pub trait Connect: Send + Sync {
    fn connect(&self, token: &str) -> Box<dyn SoundCloudApi>;
}
