mod playlist;

pub use playlist::PLAYLIST_CREATED_MESSAGE;
pub use playlist::PlaylistManager;
