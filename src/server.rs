use axum::{
    Router,
    routing::{delete, get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res,
    api::{self, AppState},
    config, info,
    soundcloud::SoundCloudConnector,
    warning,
};

pub const API_PREFIX: &str = "/api/v1/sdpm";

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health))
        .route("/token/validate", get(api::validate_token))
        .route("/users/me", get(api::current_user))
        .route("/users/{id}", get(api::user))
        .route("/playlists", get(api::playlists))
        .route("/tracks", get(api::tracks))
        .route("/playlists/unplayed", post(api::create_unplayed_playlist))
        .route(
            "/playlists/unplayed/track-ids",
            get(api::unplayed_track_ids),
        )
        .route("/playlists/merge", post(api::merge_playlists))
        .route("/playlists/random", post(api::create_random_playlist))
        .route("/playlists/{id}", delete(api::delete_playlist))
        .route("/playlists/{id}/track-ids", get(api::playlist_track_ids))
        .with_state(state);

    Router::new().nest(API_PREFIX, routes)
}

/// Starts the HTTP server and runs until Ctrl-C.
///
/// `addr` overrides the configured `SERVER_ADDRESS`.
pub async fn start_api_server(addr: Option<String>) -> Res<()> {
    let addr = addr.unwrap_or_else(config::server_addr);
    let addr = SocketAddr::from_str(&addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let connector = SoundCloudConnector::from_env()?;
    let state = AppState::new(Arc::new(connector)).with_track_limit(config::track_limit());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}{}", addr, API_PREFIX);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running until killed.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warning!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
