//! Configuration management for the SoundCloud playlist service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default, so the service starts
//! without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, str::FromStr, time::Duration};

/// Default address for the HTTP server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Default base URL of the SoundCloud private API.
pub const DEFAULT_SOUNDCLOUD_API_URL: &str = "https://api-v2.soundcloud.com";

/// Default maximum number of tracks accepted when creating a playlist.
pub const DEFAULT_TRACK_LIMIT: usize = 500;

/// Default timeout for calls to SoundCloud, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `sdpm/.env` inside the platform-specific local
/// data directory. A missing file is not an error; variables already present
/// in the process environment take precedence over the file.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sdpm/.env`
/// - macOS: `~/Library/Application Support/sdpm/.env`
/// - Windows: `%LOCALAPPDATA%/sdpm/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the optional `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sdpm/.env");
    path
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `0.0.0.0:8000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the SoundCloud API base URL without a trailing slash.
///
/// Reads `SOUNDCLOUD_API_URL`.
pub fn soundcloud_api_url() -> String {
    env::var("SOUNDCLOUD_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SOUNDCLOUD_API_URL.to_string())
}

/// Returns the SoundCloud client id, if one is configured.
///
/// Reads `SOUNDCLOUD_CLIENT_ID`. When set it is sent as the `client_id`
/// query parameter on every upstream call.
pub fn soundcloud_client_id() -> Option<String> {
    env::var("SOUNDCLOUD_CLIENT_ID")
        .ok()
        .filter(|id| !id.trim().is_empty())
}

/// Returns the maximum number of tracks accepted when creating a playlist.
///
/// Reads `SDPM_TRACK_LIMIT`.
pub fn track_limit() -> usize {
    parse_or("SDPM_TRACK_LIMIT", DEFAULT_TRACK_LIMIT)
}

/// Returns the timeout applied to each call to SoundCloud.
///
/// Reads `SDPM_REQUEST_TIMEOUT_SECS`.
pub fn request_timeout() -> Duration {
    Duration::from_secs(parse_or(
        "SDPM_REQUEST_TIMEOUT_SECS",
        DEFAULT_REQUEST_TIMEOUT_SECS,
    ))
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
