use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config;

pub type TrackId = u64;
pub type PlaylistId = u64;
pub type UserId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings applied when a derived playlist is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCreateOptions {
    pub title: String,
    pub visibility: Visibility,
    pub track_limit: usize,
}

impl PlaylistCreateOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            visibility: Visibility::default(),
            track_limit: config::DEFAULT_TRACK_LIMIT,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn track_limit(mut self, track_limit: usize) -> Self {
        self.track_limit = track_limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub track_count: Option<u64>,
    #[serde(default)]
    pub playlist_count: Option<u64>,
    #[serde(default)]
    pub followers_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub title: String,
    #[serde(default)]
    pub track_count: Option<u64>,
    #[serde(default)]
    pub sharing: Option<Visibility>,
    #[serde(default)]
    pub permalink_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: TrackId,
    #[serde(default)]
    pub title: Option<String>,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub permalink_url: Option<String>,
}

// SoundCloud API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    pub collection: Vec<T>,
    #[serde(default)]
    pub next_href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub id: TrackId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub playlist: NewPlaylist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlaylist {
    pub title: String,
    pub sharing: Visibility,
    pub tracks: Vec<TrackId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: PlaylistId,
    #[serde(default)]
    pub title: Option<String>,
}

// HTTP API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnplayedTracksRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub base_playlist_id: PlaylistId,
    pub played_playlist_ids: Vec<PlaylistId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergePlaylistsRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub playlist_ids: Vec<PlaylistId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomPlaylistRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub base_playlist_id: PlaylistId,
    #[serde(default = "default_track_count")]
    pub track_count: usize,
}

fn default_track_count() -> usize {
    30
}
