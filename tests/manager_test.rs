mod common;

use std::collections::HashSet;

use common::{ME, TOKEN, account, connector};
use sdpm::error::PlaylistError;
use sdpm::management::{PLAYLIST_CREATED_MESSAGE, PlaylistManager};
use sdpm::soundcloud::Connect;
use sdpm::types::{PlaylistCreateOptions, TrackId, Visibility};

async fn manager(shared: &common::Shared) -> PlaylistManager {
    let connector = connector(shared);
    PlaylistManager::connect_with_token(TOKEN, |t| connector.connect(t))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_connect_rejects_invalid_token() {
    let shared = account(&[]);
    let connector = connector(&shared);

    let result = PlaylistManager::connect(connector.connect("expired")).await;
    assert!(matches!(result, Err(PlaylistError::InvalidToken)));
    assert_eq!(shared.lock().unwrap().validations, 1);
}

#[tokio::test]
async fn test_connect_rejects_empty_token_without_upstream_call() {
    let shared = account(&[]);
    let connector = connector(&shared);

    let result = PlaylistManager::connect_with_token("  ", |t| connector.connect(t)).await;
    assert!(matches!(result, Err(PlaylistError::InvalidToken)));
    assert_eq!(shared.lock().unwrap().validations, 0);
}

#[tokio::test]
async fn test_unplayed_tracks_playlist() {
    let shared = account(&[(1, &[1, 2, 3, 4, 5]), (2, &[2, 4])]);
    let manager = manager(&shared).await;
    let options = PlaylistCreateOptions::new("Unplayed").visibility(Visibility::Public);

    let response = manager
        .create_unplayed_tracks_playlist(1, &[2], &options)
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.message, PLAYLIST_CREATED_MESSAGE);

    let account = shared.lock().unwrap();
    assert_eq!(account.created.len(), 1);
    assert_eq!(account.created[0].title, "Unplayed");
    assert_eq!(account.created[0].visibility, Visibility::Public);
    assert_eq!(account.created[0].tracks, vec![1, 3, 5]);
}

#[tokio::test]
async fn test_unplayed_track_ids_across_several_played_playlists() {
    let shared = account(&[(1, &[1, 2, 3, 4, 5]), (2, &[2]), (3, &[5, 6])]);
    let manager = manager(&shared).await;

    let ids = manager.get_unplayed_track_ids(1, &[2, 3]).await.unwrap();
    assert_eq!(ids, vec![1, 3, 4]);

    let ids = manager.get_unplayed_track_ids(1, &[]).await.unwrap();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_create_playlist_over_track_limit_makes_no_call() {
    let shared = account(&[]);
    let manager = manager(&shared).await;
    let options = PlaylistCreateOptions::new("Too big");
    let tracks: Vec<TrackId> = (1..=501).collect();

    let result = manager.create_playlist(&options, &tracks).await;

    assert!(matches!(
        result,
        Err(PlaylistError::TrackLimitExceeded {
            count: 501,
            limit: 500
        })
    ));
    assert!(shared.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn test_create_playlist_at_track_limit() {
    let shared = account(&[]);
    let manager = manager(&shared).await;
    let options = PlaylistCreateOptions::new("Full").track_limit(3);

    let response = manager.create_playlist(&options, &[7, 8, 9]).await.unwrap();
    assert!(response.success);
    assert_eq!(shared.lock().unwrap().created[0].tracks, vec![7, 8, 9]);
}

#[tokio::test]
async fn test_merge_playlists() {
    let shared = account(&[(1, &[1, 2]), (2, &[2, 3])]);
    let manager = manager(&shared).await;

    let response = manager
        .merge_playlists(&[1, 2], &PlaylistCreateOptions::new("Merged"))
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(shared.lock().unwrap().created[0].tracks, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_merge_playlists_respects_track_limit() {
    let shared = account(&[(1, &[1, 2]), (2, &[2, 3])]);
    let manager = manager(&shared).await;
    let options = PlaylistCreateOptions::new("Merged").track_limit(2);

    let result = manager.merge_playlists(&[1, 2], &options).await;
    assert!(matches!(
        result,
        Err(PlaylistError::TrackLimitExceeded { count: 3, limit: 2 })
    ));
}

#[tokio::test]
async fn test_merge_nothing_is_invalid() {
    let shared = account(&[]);
    let manager = manager(&shared).await;

    let result = manager
        .merge_playlists(&[], &PlaylistCreateOptions::new("Merged"))
        .await;
    assert!(matches!(result, Err(PlaylistError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_random_playlist() {
    let shared = account(&[(1, &[1, 2, 3, 4, 5])]);
    let manager = manager(&shared).await;

    let response = manager
        .create_random_playlist(1, 3, &PlaylistCreateOptions::new("Random"))
        .await
        .unwrap();
    assert!(response.success);

    let account = shared.lock().unwrap();
    let tracks: HashSet<TrackId> = account.created[0].tracks.iter().copied().collect();
    assert_eq!(tracks.len(), 3);
    assert!(tracks.is_subset(&HashSet::from([1, 2, 3, 4, 5])));
}

#[tokio::test]
async fn test_random_playlist_overflow_creates_nothing() {
    let shared = account(&[(1, &[1, 2])]);
    let manager = manager(&shared).await;

    let result = manager
        .create_random_playlist(1, 30, &PlaylistCreateOptions::new("Random"))
        .await;

    assert!(matches!(
        result,
        Err(PlaylistError::NotEnoughTracks {
            requested: 30,
            available: 2
        })
    ));
    assert!(shared.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn test_delete_playlist() {
    let shared = account(&[(9, &[1])]);
    let manager = manager(&shared).await;

    let response = manager.delete_playlist(9).await.unwrap();
    assert!(response.success);
    assert_eq!(response.message, "Playlist 9 deleted successfully");
    assert_eq!(shared.lock().unwrap().deleted, vec![9]);
}

#[tokio::test]
async fn test_missing_playlist_is_upstream_failure() {
    let shared = account(&[(1, &[1, 2])]);
    let manager = manager(&shared).await;

    let result = manager
        .create_unplayed_tracks_playlist(1, &[99], &PlaylistCreateOptions::new("Unplayed"))
        .await;
    assert!(matches!(result, Err(PlaylistError::Upstream { .. })));
    assert!(shared.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn test_user_lookups_default_to_current_user() {
    let shared = account(&[(1, &[1, 2]), (2, &[3])]);
    let manager = manager(&shared).await;

    assert_eq!(manager.get_user(None).await.unwrap().id, ME);
    assert_eq!(manager.get_playlists(None).await.unwrap().len(), 2);
    assert_eq!(manager.get_tracks(None).await.unwrap()[0].id, 7);
    assert!(manager.get_playlists(Some(1000)).await.unwrap().is_empty());
    assert!(manager.get_user(Some(1000)).await.is_err());
}
