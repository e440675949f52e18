//! Concurrency-safe in-memory repository of users, playlists and songs.
//!
//! All three maps live behind one `RwLock`: lookups share it, every mutation
//! takes it exclusively. Relationships (playlist -> user, song -> playlist)
//! are plain id strings kept consistent by the operations here.

pub mod error;
pub mod id;
pub mod model;

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use error::{Entity, StoreError, StoreResult};
pub use id::{IdGenerator, UuidGenerator};
pub use model::{NewPlaylist, NewSong, NewUser, Playlist, Song, User};

/// The maps guarded by the store lock.
#[derive(Debug, Default)]
struct Tables {
    /// Keyed by secret code, not by user id.
    users: HashMap<String, User>,
    /// Emails of every stored user, for the uniqueness check.
    emails: HashSet<String>,
    playlists: HashMap<String, Playlist>,
    /// Every song reachable through some playlist, keyed by song id.
    songs: HashMap<String, Song>,
}

pub struct Store {
    tables: RwLock<Tables>,
    ids: Box<dyn IdGenerator>,
}

impl Store {
    /// Empty store handing out UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            ids: Box::new(ids),
        }
    }

    // Operations check everything before they touch the maps, so a panic
    // while the lock is held cannot leave a half-applied change behind.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a user and return it with its generated `id` and `secret_code`.
    pub fn create_user(&self, new: NewUser) -> StoreResult<User> {
        if new.name.is_empty() || new.email.is_empty() {
            return Err(StoreError::Validation("Name and Email are required"));
        }

        let user = User {
            id: self.ids.next_id(),
            secret_code: self.ids.next_id(),
            name: new.name,
            email: new.email,
        };

        let mut tables = self.write();
        if tables.emails.contains(&user.email) {
            return Err(StoreError::Conflict("User with this email already exists"));
        }
        assert!(
            !tables.users.contains_key(&user.secret_code),
            "generated secret code collided: {}",
            user.secret_code
        );
        tables.emails.insert(user.email.clone());
        tables.users.insert(user.secret_code.clone(), user.clone());
        drop(tables);

        tracing::debug!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Look a user up by credential. Serves both login and profile views.
    pub fn authenticate_user(&self, secret_code: &str) -> StoreResult<User> {
        self.read()
            .users
            .get(secret_code)
            .cloned()
            .ok_or(StoreError::NotFound(Entity::User))
    }

    /// Snapshot of a playlist's songs in insertion order.
    pub fn get_playlist_songs(&self, playlist_id: &str) -> StoreResult<Vec<Song>> {
        self.read()
            .playlists
            .get(playlist_id)
            .map(|playlist| playlist.songs.clone())
            .ok_or(StoreError::NotFound(Entity::Playlist))
    }

    /// Create an empty playlist owned by the user holding `secret_code`.
    pub fn create_playlist(&self, secret_code: &str, new: NewPlaylist) -> StoreResult<Playlist> {
        let id = self.ids.next_id();

        let mut tables = self.write();
        let owner = tables
            .users
            .get(secret_code)
            .ok_or(StoreError::NotFound(Entity::User))?;
        let playlist = Playlist {
            id,
            name: new.name,
            songs: Vec::new(),
            user_id: owner.id.clone(),
        };
        assert!(
            !tables.playlists.contains_key(&playlist.id),
            "generated playlist id collided: {}",
            playlist.id
        );
        tables.playlists.insert(playlist.id.clone(), playlist.clone());
        drop(tables);

        tracing::debug!(playlist_id = %playlist.id, user_id = %playlist.user_id, "playlist created");
        Ok(playlist)
    }

    /// Remove a playlist together with the songs it holds.
    pub fn delete_playlist(&self, playlist_id: &str) -> StoreResult<()> {
        let mut tables = self.write();
        let playlist = tables
            .playlists
            .remove(playlist_id)
            .ok_or(StoreError::NotFound(Entity::Playlist))?;
        for song in &playlist.songs {
            tables.songs.remove(&song.id);
        }
        drop(tables);

        tracing::debug!(playlist_id, songs = playlist.songs.len(), "playlist deleted");
        Ok(())
    }

    pub fn get_song(&self, song_id: &str) -> StoreResult<Song> {
        self.read()
            .songs
            .get(song_id)
            .cloned()
            .ok_or(StoreError::NotFound(Entity::Song))
    }

    /// Append a new song to the end of a playlist and return the updated playlist.
    pub fn add_song_to_playlist(&self, playlist_id: &str, new: NewSong) -> StoreResult<Playlist> {
        let song = Song {
            id: self.ids.next_id(),
            name: new.name,
            composers: new.composers,
            music_url: new.music_url,
        };

        let mut tables = self.write();
        if !tables.playlists.contains_key(playlist_id) {
            return Err(StoreError::NotFound(Entity::Playlist));
        }
        assert!(
            !tables.songs.contains_key(&song.id),
            "generated song id collided: {}",
            song.id
        );
        tables.songs.insert(song.id.clone(), song.clone());
        let playlist = tables
            .playlists
            .get_mut(playlist_id)
            .ok_or(StoreError::NotFound(Entity::Playlist))?;
        playlist.songs.push(song);
        let updated = playlist.clone();
        drop(tables);

        tracing::debug!(playlist_id, songs = updated.songs.len(), "song appended");
        Ok(updated)
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.read().playlists.len()
    }

    pub fn song_count(&self) -> usize {
        self.read().songs.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
