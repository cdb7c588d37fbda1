#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use reqwest::StatusCode;
use sdpm::{
    error::{PlaylistError, Result},
    soundcloud::{Connect, SoundCloudApi},
    types::{PlaylistId, PlaylistSummary, TrackId, TrackSummary, User, UserId, Visibility},
};

pub const TOKEN: &str = "valid-token";
pub const ME: UserId = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPlaylist {
    pub visibility: Visibility,
    pub title: String,
    pub tracks: Vec<TrackId>,
}

/// In-memory SoundCloud account shared by every client a connector hands out.
#[derive(Debug, Default)]
pub struct FakeAccount {
    pub playlists: BTreeMap<PlaylistId, Vec<TrackId>>,
    pub created: Vec<CreatedPlaylist>,
    pub deleted: Vec<PlaylistId>,
    pub validations: usize,
}

pub type Shared = Arc<Mutex<FakeAccount>>;

pub fn account(playlists: &[(PlaylistId, &[TrackId])]) -> Shared {
    let account = FakeAccount {
        playlists: playlists
            .iter()
            .map(|(id, tracks)| (*id, tracks.to_vec()))
            .collect(),
        ..Default::default()
    };
    Arc::new(Mutex::new(account))
}

fn user(id: UserId) -> User {
    User {
        id,
        username: format!("user-{}", id),
        full_name: None,
        permalink_url: None,
        avatar_url: None,
        track_count: None,
        playlist_count: None,
        followers_count: None,
    }
}

fn not_found(what: &str) -> PlaylistError {
    PlaylistError::from_status(StatusCode::NOT_FOUND, format!("{} not found", what))
}

pub struct FakeSoundCloud {
    account: Shared,
    token: String,
}

#[async_trait]
impl SoundCloudApi for FakeSoundCloud {
    async fn validate_token(&self) -> Result<bool> {
        self.account.lock().unwrap().validations += 1;
        Ok(self.token == TOKEN)
    }

    async fn get_me(&self) -> Result<User> {
        Ok(user(ME))
    }

    async fn get_user(&self, user_id: UserId) -> Result<User> {
        if user_id == ME {
            Ok(user(ME))
        } else {
            Err(not_found("user"))
        }
    }

    async fn get_user_playlists(&self, user_id: UserId) -> Result<Vec<PlaylistSummary>> {
        if user_id != ME {
            return Ok(Vec::new());
        }
        let account = self.account.lock().unwrap();
        Ok(account
            .playlists
            .iter()
            .map(|(id, tracks)| PlaylistSummary {
                id: *id,
                title: format!("playlist-{}", id),
                track_count: Some(tracks.len() as u64),
                sharing: Some(Visibility::Private),
                permalink_url: None,
            })
            .collect())
    }

    async fn get_user_tracks(&self, user_id: UserId) -> Result<Vec<TrackSummary>> {
        if user_id != ME {
            return Ok(Vec::new());
        }
        Ok(vec![TrackSummary {
            id: 7,
            title: Some("own track".to_string()),
            duration: Some(180_000),
            permalink_url: None,
        }])
    }

    async fn get_playlist_track_ids(&self, playlist_id: PlaylistId) -> Result<Vec<TrackId>> {
        self.account
            .lock()
            .unwrap()
            .playlists
            .get(&playlist_id)
            .cloned()
            .ok_or_else(|| not_found("playlist"))
    }

    async fn create_playlist(
        &self,
        visibility: Visibility,
        title: &str,
        track_ids: &[TrackId],
    ) -> Result<PlaylistId> {
        let mut account = self.account.lock().unwrap();
        let id = account.playlists.keys().max().copied().unwrap_or(0) + 1;
        account.playlists.insert(id, track_ids.to_vec());
        account.created.push(CreatedPlaylist {
            visibility,
            title: title.to_string(),
            tracks: track_ids.to_vec(),
        });
        Ok(id)
    }

    async fn delete_playlist(&self, playlist_id: PlaylistId) -> Result<()> {
        let mut account = self.account.lock().unwrap();
        if account.playlists.remove(&playlist_id).is_none() {
            return Err(not_found("playlist"));
        }
        account.deleted.push(playlist_id);
        Ok(())
    }
}

pub struct FakeConnector {
    pub account: Shared,
}

impl Connect for FakeConnector {
    fn connect(&self, token: &str) -> Box<dyn SoundCloudApi> {
        Box::new(FakeSoundCloud {
            account: Arc::clone(&self.account),
            token: token.to_string(),
        })
    }
}

pub fn connector(account: &Shared) -> FakeConnector {
    FakeConnector {
        account: Arc::clone(account),
    }
}
