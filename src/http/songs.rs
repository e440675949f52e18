use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use crate::http::error::ApiResult;
use crate::http::playlists::PlaylistQuery;
use crate::http::state::AppState;
use crate::store::{NewSong, Playlist, Song};

#[derive(Debug, Default, Deserialize)]
pub struct SongQuery {
    #[serde(rename = "songId", default)]
    pub song_id: String,
}

/// GET /getSongDetail?songId=
pub async fn song_detail(
    State(state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> ApiResult<Json<Song>> {
    Ok(Json(state.store.get_song(&query.song_id)?))
}

/// POST /addSongToPlaylist?playlistId= — responds with the whole updated playlist.
pub async fn add_to_playlist(
    State(state): State<AppState>,
    Query(query): Query<PlaylistQuery>,
    body: String,
) -> ApiResult<(StatusCode, Json<Playlist>)> {
    // Missing playlist wins over a bad body.
    state.store.get_playlist_songs(&query.playlist_id)?;
    let new: NewSong = super::decode_body(&body)?;
    let playlist = state.store.add_song_to_playlist(&query.playlist_id, new)?;
    Ok((StatusCode::CREATED, Json(playlist)))
}
