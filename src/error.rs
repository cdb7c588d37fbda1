//! Error taxonomy for playlist operations.
//!
//! Every failure a playlist operation can produce is one of the variants of
//! [`PlaylistError`]. Errors travel unchanged from the SoundCloud client
//! through the [`PlaylistManager`](crate::management::PlaylistManager) and
//! are mapped to HTTP status codes only by the API layer.

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::TrackId;

/// Result type for playlist operations.
pub type Result<T> = std::result::Result<T, PlaylistError>;

#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The token was empty, expired or rejected by SoundCloud.
    #[error("Invalid SoundCloud authentication token")]
    InvalidToken,

    /// A playlist would hold more tracks than allowed.
    #[error("Track limit exceeded: {count} tracks (limit: {limit})")]
    TrackLimitExceeded { count: usize, limit: usize },

    /// A random sample asked for more tracks than the base playlist holds.
    #[error("Requested track count ({requested}) exceeds available tracks ({available})")]
    NotEnoughTracks { requested: usize, available: usize },

    /// The request was well-formed JSON but made no sense.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// SoundCloud answered with a failure status.
    #[error("SoundCloud request failed ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    /// The call to SoundCloud failed before a usable answer arrived.
    #[error("SoundCloud request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl PlaylistError {
    /// Builds an error from a failure status returned by SoundCloud.
    ///
    /// 401 and 403 mean the token is no good; everything else is an upstream failure.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::InvalidToken,
            _ => Self::Upstream {
                status,
                message: message.into(),
            },
        }
    }

    /// Checks a playlist size against a track limit.
    pub fn check_track_limit(tracks: &[TrackId], limit: usize) -> Result<()> {
        if tracks.len() > limit {
            return Err(Self::TrackLimitExceeded {
                count: tracks.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Whether the error is the caller's fault rather than SoundCloud's or ours.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::TrackLimitExceeded { .. } | Self::NotEnoughTracks { .. } | Self::InvalidRequest(_)
        )
    }
}
