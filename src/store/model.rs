use serde::{Deserialize, Serialize};

/// A registered account. `secret_code` is both the login credential and the
/// key the store files the user under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "SecretCode")]
    pub secret_code: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Unique across all stored users.
    #[serde(rename = "Email")]
    pub email: String,
}

/// A named, ordered list of songs owned by the user whose `id` is `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Insertion order. Only ever grows, through `Store::add_song_to_playlist`.
    #[serde(rename = "Songs", default)]
    pub songs: Vec<Song>,
    #[serde(rename = "UserID")]
    pub user_id: String,
}

/// A track entry. Songs only come into being inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Composers")]
    pub composers: String,
    #[serde(rename = "MusicURL")]
    pub music_url: String,
}

/// Registration payload. Missing fields decode as empty strings and are
/// rejected by the store, not by the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Email", alias = "email")]
    pub email: String,
}

/// Playlist creation payload. Any `ID`, `UserID` or `Songs` the caller sends
/// is dropped on the floor; the store assigns those itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPlaylist {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewSong {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Composers", alias = "composers")]
    pub composers: String,
    #[serde(rename = "MusicURL", alias = "musicURL", alias = "musicUrl")]
    pub music_url: String,
}
