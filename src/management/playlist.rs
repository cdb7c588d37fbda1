use crate::{
    error::{PlaylistError, Result},
    soundcloud::SoundCloudApi,
    types::{
        ApiResponse, PlaylistCreateOptions, PlaylistId, PlaylistSummary, TrackId, TrackSummary,
        User, UserId,
    },
    utils,
};

pub const PLAYLIST_CREATED_MESSAGE: &str = "Playlist created successfully. Check your playlists :)";

/// Derives playlists for one SoundCloud account.
///
/// A manager only exists for a token SoundCloud accepted; see [`PlaylistManager::connect`].
pub struct PlaylistManager {
    client: Box<dyn SoundCloudApi>,
}

impl PlaylistManager {
    /// Validates the client's token and wraps the client.
    ///
    /// Fails with [`PlaylistError::InvalidToken`] when SoundCloud rejects the token.
    pub async fn connect(client: Box<dyn SoundCloudApi>) -> Result<Self> {
        if !client.validate_token().await? {
            return Err(PlaylistError::InvalidToken);
        }
        Ok(Self { client })
    }

    /// Same as [`PlaylistManager::connect`], but refuses an empty token
    /// without asking SoundCloud.
    pub async fn connect_with_token(
        token: &str,
        connect: impl FnOnce(&str) -> Box<dyn SoundCloudApi>,
    ) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(PlaylistError::InvalidToken);
        }
        Self::connect(connect(token)).await
    }

    pub async fn get_user(&self, user_id: Option<UserId>) -> Result<User> {
        match user_id {
            Some(id) => self.client.get_user(id).await,
            None => self.client.get_me().await,
        }
    }

    pub async fn get_playlists(&self, user_id: Option<UserId>) -> Result<Vec<PlaylistSummary>> {
        let user_id = self.resolve_user(user_id).await?;
        self.client.get_user_playlists(user_id).await
    }

    pub async fn get_tracks(&self, user_id: Option<UserId>) -> Result<Vec<TrackSummary>> {
        let user_id = self.resolve_user(user_id).await?;
        self.client.get_user_tracks(user_id).await
    }

    pub async fn get_track_ids(&self, playlist_id: PlaylistId) -> Result<Vec<TrackId>> {
        self.client.get_playlist_track_ids(playlist_id).await
    }

    /// Tracks of the base playlist that none of the played playlists contain.
    pub async fn get_unplayed_track_ids(
        &self,
        base_playlist_id: PlaylistId,
        played_playlist_ids: &[PlaylistId],
    ) -> Result<Vec<TrackId>> {
        let base = self.get_track_ids(base_playlist_id).await?;
        let played = self.get_all_track_ids(played_playlist_ids).await?;
        Ok(utils::unplayed(&base, &played))
    }

    /// Creates a playlist, refusing it up front when it exceeds the track limit.
    pub async fn create_playlist(
        &self,
        options: &PlaylistCreateOptions,
        track_ids: &[TrackId],
    ) -> Result<ApiResponse> {
        PlaylistError::check_track_limit(track_ids, options.track_limit)?;

        self.client
            .create_playlist(options.visibility, &options.title, track_ids)
            .await?;
        Ok(ApiResponse::ok(PLAYLIST_CREATED_MESSAGE))
    }

    pub async fn create_unplayed_tracks_playlist(
        &self,
        base_playlist_id: PlaylistId,
        played_playlist_ids: &[PlaylistId],
        options: &PlaylistCreateOptions,
    ) -> Result<ApiResponse> {
        let unplayed = self
            .get_unplayed_track_ids(base_playlist_id, played_playlist_ids)
            .await?;
        self.create_playlist(options, &unplayed).await
    }

    pub async fn merge_playlists(
        &self,
        playlist_ids: &[PlaylistId],
        options: &PlaylistCreateOptions,
    ) -> Result<ApiResponse> {
        if playlist_ids.is_empty() {
            return Err(PlaylistError::InvalidRequest(
                "at least one playlist id is required".to_string(),
            ));
        }

        let playlists = self.get_all_track_ids(playlist_ids).await?;
        self.create_playlist(options, &utils::merge(&playlists))
            .await
    }

    pub async fn create_random_playlist(
        &self,
        base_playlist_id: PlaylistId,
        track_count: usize,
        options: &PlaylistCreateOptions,
    ) -> Result<ApiResponse> {
        let track_ids = self.get_track_ids(base_playlist_id).await?;
        let selected = utils::random_sample(&track_ids, track_count)?;
        self.create_playlist(options, &selected).await
    }

    pub async fn delete_playlist(&self, playlist_id: PlaylistId) -> Result<ApiResponse> {
        self.client.delete_playlist(playlist_id).await?;
        Ok(ApiResponse::ok(format!(
            "Playlist {} deleted successfully",
            playlist_id
        )))
    }

    async fn resolve_user(&self, user_id: Option<UserId>) -> Result<UserId> {
        match user_id {
            Some(id) => Ok(id),
            None => Ok(self.client.get_me().await?.id),
        }
    }

    async fn get_all_track_ids(&self, playlist_ids: &[PlaylistId]) -> Result<Vec<Vec<TrackId>>> {
        let mut all = Vec::with_capacity(playlist_ids.len());
        for playlist_id in playlist_ids {
            all.push(self.get_track_ids(*playlist_id).await?);
        }
        Ok(all)
    }
}
