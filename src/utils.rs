use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::{
    error::{PlaylistError, Result},
    types::TrackId,
};

/// Tracks of `base` that appear in none of the `played` playlists.
///
/// Keeps the order of `base` and drops repeated ids.
pub fn unplayed(base: &[TrackId], played: &[Vec<TrackId>]) -> Vec<TrackId> {
    let mut seen: HashSet<TrackId> = played.iter().flatten().copied().collect();
    base.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Union of all `playlists`, in order of first appearance.
pub fn merge(playlists: &[Vec<TrackId>]) -> Vec<TrackId> {
    let mut seen = HashSet::new();
    playlists
        .iter()
        .flatten()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Draws `count` distinct tracks from `ids` in random order.
///
/// Fails with [`PlaylistError::NotEnoughTracks`] when `ids` holds fewer than
/// `count` distinct tracks, and with [`PlaylistError::InvalidRequest`] when
/// `count` is zero.
pub fn random_sample(ids: &[TrackId], count: usize) -> Result<Vec<TrackId>> {
    if count == 0 {
        return Err(PlaylistError::InvalidRequest(
            "track_count must be greater than zero".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let mut pool: Vec<TrackId> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();
    if count > pool.len() {
        return Err(PlaylistError::NotEnoughTracks {
            requested: count,
            available: pool.len(),
        });
    }

    pool.shuffle(&mut rand::rng());
    pool.truncate(count);
    Ok(pool)
}

/// Parses a comma-separated list of ids such as `"12,34, 56"`.
pub fn parse_id_list(s: &str) -> std::result::Result<Vec<u64>, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("id list cannot be empty".to_string());
    }

    trimmed
        .split(',')
        .map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return Err(format!("empty segment in id list '{}'", s));
            }
            part.parse::<u64>()
                .map_err(|_| format!("invalid id '{}'", part))
        })
        .collect()
}
