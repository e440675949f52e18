use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use crate::http::error::ApiResult;
use crate::http::state::AppState;
use crate::http::users::CredentialQuery;
use crate::store::{NewPlaylist, Playlist, Song};

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistQuery {
    #[serde(rename = "playlistId", default)]
    pub playlist_id: String,
}

/// GET /getAllSongsOfPlaylist?playlistId=
pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<PlaylistQuery>,
) -> ApiResult<Json<Vec<Song>>> {
    Ok(Json(state.store.get_playlist_songs(&query.playlist_id)?))
}

/// POST /createPlaylist?secretCode=
///
/// An unknown secret code is reported before the body is looked at, so a
/// stranger with a malformed body still gets 404 rather than 400.
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<CredentialQuery>,
    body: String,
) -> ApiResult<(StatusCode, Json<Playlist>)> {
    state.store.authenticate_user(&query.secret_code)?;
    let new: NewPlaylist = super::decode_body(&body)?;
    let playlist = state.store.create_playlist(&query.secret_code, new)?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// DELETE /deletePlaylist?playlistId=
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<PlaylistQuery>,
) -> ApiResult<StatusCode> {
    state.store.delete_playlist(&query.playlist_id)?;
    Ok(StatusCode::NO_CONTENT)
}
