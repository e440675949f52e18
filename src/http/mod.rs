pub mod error;
pub mod playlists;
pub mod songs;
pub mod state;
pub mod users;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use crate::http::error::ApiError;
use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", get(users::login))
        .route("/ViewProfile", get(users::view_profile))
        .route("/getAllSongsOfPlaylist", get(playlists::list_songs))
        .route("/createPlaylist", post(playlists::create))
        .route("/deletePlaylist", delete(playlists::delete))
        .route("/getSongDetail", get(songs::song_detail))
        .route("/addSongToPlaylist", post(songs::add_to_playlist))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Decode a JSON request body. Any decode failure is a 400 carrying the
/// decoder's message, whatever the Content-Type header said.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!("Rejecting malformed request body: {}", e);
        ApiError::BadRequest(e.to_string())
    })
}
