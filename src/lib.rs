//! SoundCloud Playlist Derivation Library
//!
//! This library exposes a small HTTP service on top of SoundCloud's private
//! API. It derives new playlists from existing ones: the tracks of a base
//! playlist not yet heard in any "played" playlist, the union of several
//! playlists, or a random sample of a playlist.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and error-to-status mapping
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every playlist operation
//! - `management` - The playlist manager bound to one SoundCloud account
//! - `server` - Router construction and the HTTP server loop
//! - `soundcloud` - SoundCloud API client behind the `SoundCloudApi` trait
//! - `types` - Data structures and type definitions
//! - `utils` - Playlist derivation and parsing helpers
//!
//! # Example
//!
//! ```
//! use sdpm::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> sdpm::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(None).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod soundcloud;
pub mod types;
pub mod utils;

/// Result type for start-up and server plumbing.
///
/// Playlist operations use the typed [`crate::error::Result`] instead; this boxed
/// alias only collects failures that end the process (bad bind address,
/// unusable configuration, server I/O).
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal start-up failures; request handlers never call it.
///
/// ```
/// error!("Server error: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for failed SoundCloud calls that end up as 5xx responses.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
