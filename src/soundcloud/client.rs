use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::{PlaylistError, Result},
    soundcloud::{Connect, SoundCloudApi},
    types::{
        Collection, CreatePlaylistRequest, CreatePlaylistResponse, NewPlaylist, Playlist,
        PlaylistId, PlaylistSummary, TrackId, TrackSummary, User, UserId, Visibility,
    },
};

/// Builds a [`SoundCloudClient`] per request from a shared HTTP connection pool.
#[derive(Debug, Clone)]
pub struct SoundCloudConnector {
    http: Client,
    api_url: String,
    client_id: Option<String>,
}

impl SoundCloudConnector {
    pub fn new(
        api_url: impl Into<String>,
        client_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            client_id,
        })
    }

    /// Connector configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(
            config::soundcloud_api_url(),
            config::soundcloud_client_id(),
            config::request_timeout(),
        )
    }
}

impl Connect for SoundCloudConnector {
    fn connect(&self, token: &str) -> Box<dyn SoundCloudApi> {
        Box::new(SoundCloudClient {
            http: self.http.clone(),
            api_url: self.api_url.clone(),
            client_id: self.client_id.clone(),
            token: token.to_string(),
        })
    }
}

/// SoundCloud API v2 client bound to one OAuth token.
pub struct SoundCloudClient {
    http: Client,
    api_url: String,
    client_id: Option<String>,
    token: String,
}

impl SoundCloudClient {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{uri}{path}", uri = self.api_url, path = path);
        let mut builder = self
            .http
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token));
        if let Some(client_id) = &self.client_id {
            builder = builder.query(&[("client_id", client_id)]);
        }
        builder
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turns a failure status into a [`PlaylistError`], keeping the body as message.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body
    };
    Err(PlaylistError::from_status(status, message))
}

#[async_trait]
impl SoundCloudApi for SoundCloudClient {
    async fn validate_token(&self) -> Result<bool> {
        let response = self.request(Method::GET, "/me").send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            _ => check_status(response).await.map(|_| false),
        }
    }

    async fn get_me(&self) -> Result<User> {
        self.get_json("/me").await
    }

    async fn get_user(&self, user_id: UserId) -> Result<User> {
        self.get_json(&format!("/users/{}", user_id)).await
    }

    async fn get_user_playlists(&self, user_id: UserId) -> Result<Vec<PlaylistSummary>> {
        let page: Collection<PlaylistSummary> = self
            .get_json(&format!("/users/{}/playlists", user_id))
            .await?;
        Ok(page.collection)
    }

    async fn get_user_tracks(&self, user_id: UserId) -> Result<Vec<TrackSummary>> {
        let page: Collection<TrackSummary> =
            self.get_json(&format!("/users/{}/tracks", user_id)).await?;
        Ok(page.collection)
    }

    async fn get_playlist_track_ids(&self, playlist_id: PlaylistId) -> Result<Vec<TrackId>> {
        let playlist: Playlist = self
            .get_json(&format!("/playlists/{}", playlist_id))
            .await?;
        Ok(playlist.tracks.into_iter().map(|track| track.id).collect())
    }

    async fn create_playlist(
        &self,
        visibility: Visibility,
        title: &str,
        track_ids: &[TrackId],
    ) -> Result<PlaylistId> {
        let body = CreatePlaylistRequest {
            playlist: NewPlaylist {
                title: title.to_string(),
                sharing: visibility,
                tracks: track_ids.to_vec(),
            },
        };

        let response = self
            .request(Method::POST, "/playlists")
            .json(&body)
            .send()
            .await?;
        let created = check_status(response)
            .await?
            .json::<CreatePlaylistResponse>()
            .await?;
        Ok(created.id)
    }

    async fn delete_playlist(&self, playlist_id: PlaylistId) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/playlists/{}", playlist_id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
