use serde::{Deserialize, Serialize};

/// A song in a concert setlist. `order` is a sort key persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub concert_id: i64,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongOrderUpdate {
    pub song_id: i64,
    pub order: i64,
}
