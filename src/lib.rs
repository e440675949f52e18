//! In-memory music playlist service: a locked store of users, playlists and
//! songs, served over HTTP.

pub mod cli;
pub mod config;
pub mod http;
pub mod store;
