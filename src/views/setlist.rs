use crate::api::{ConcertsApi, SongsApi};
use crate::models::{NewSong, Song, SongOrderUpdate};
use crate::observable::Observable;
use crate::router::{Route, Router};
use crate::ui::log;
use std::sync::Arc;

pub const LOAD_SONGS_FAILED: &str = "Failed to load songs";
pub const ADD_SONG_FAILED: &str = "Failed to add song";
pub const REMOVE_SONG_FAILED: &str = "Failed to remove song";
pub const REORDER_FAILED: &str = "Failed to reorder songs";
pub const EMPTY_MESSAGE: &str = "No songs in your setlist yet. Add your first song above.";

#[derive(Debug, Clone, Default)]
pub struct SongForm {
    pub title: String,
    pub notes: String,
}

/// Songs of one concert, in setlist order.
pub struct SetlistView {
    songs_api: Arc<dyn SongsApi>,
    concerts_api: Arc<dyn ConcertsApi>,
    router: Arc<Router>,
    concert_id: i64,
    pub form: SongForm,
    title: Observable<String>,
    songs: Observable<Vec<Song>>,
    error: Observable<Option<String>>,
}

impl SetlistView {
    pub fn new(
        songs_api: Arc<dyn SongsApi>,
        concerts_api: Arc<dyn ConcertsApi>,
        router: Arc<Router>,
        concert_id: i64,
    ) -> Self {
        Self {
            songs_api,
            concerts_api,
            router,
            concert_id,
            form: SongForm::default(),
            title: Observable::new(String::new()),
            songs: Observable::new(Vec::new()),
            error: Observable::new(None),
        }
    }

    pub fn concert_id(&self) -> i64 {
        self.concert_id
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn songs(&self) -> Vec<Song> {
        self.songs.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn contains_song(&self, song_id: i64) -> bool {
        self.songs.with(|songs| songs.iter().any(|s| s.id == song_id))
    }

    pub fn title_state(&self) -> &Observable<String> {
        &self.title
    }

    pub fn songs_state(&self) -> &Observable<Vec<Song>> {
        &self.songs
    }

    pub fn error_state(&self) -> &Observable<Option<String>> {
        &self.error
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.songs.with(|list| list.is_empty()) {
            Some(EMPTY_MESSAGE)
        } else {
            None
        }
    }

    /// Fetch the heading and the songs side by side.
    pub async fn open(&self) {
        tokio::join!(self.load_concert_title(), self.load_setlist());
    }

    /// The title arrives on its own; until then it stays empty. A failed
    /// lookup leaves it empty without touching the error slot.
    pub async fn load_concert_title(&self) {
        match self.concerts_api.get(self.concert_id).await {
            Ok(concert) => self.title.set(concert.title),
            Err(e) => log::verbose(format!(
                "Could not load title for concert {}: {}",
                self.concert_id, e
            )),
        }
    }

    pub async fn load_setlist(&self) {
        match self.songs_api.list(self.concert_id).await {
            Ok(songs) => {
                let concert_id = self.concert_id;
                self.songs
                    .set(songs.into_iter().filter(|s| s.concert_id == concert_id).collect());
            }
            Err(e) => self.error.set(Some(e.user_message(LOAD_SONGS_FAILED))),
        }
    }

    /// Submit the song form. Title and notes are trimmed; a blank title
    /// issues no request.
    pub async fn add_song(&mut self) -> bool {
        let title = self.form.title.trim();
        if title.is_empty() {
            return false;
        }
        let song = NewSong {
            title: title.to_string(),
            notes: self.form.notes.trim().to_string(),
        };

        match self.songs_api.create(self.concert_id, &song).await {
            Ok(created) => {
                if created.concert_id == self.concert_id {
                    self.songs.update(|list| list.push(created));
                }
                self.form = SongForm::default();
                self.load_setlist().await;
                true
            }
            Err(e) => {
                self.error.set(Some(e.user_message(ADD_SONG_FAILED)));
                false
            }
        }
    }

    pub async fn remove_song(&self, song_id: i64) -> bool {
        match self.songs_api.delete(self.concert_id, song_id).await {
            Ok(_) => {
                self.songs.update(|list| list.retain(|s| s.id != song_id));
                true
            }
            Err(e) => {
                self.error.set(Some(e.user_message(REMOVE_SONG_FAILED)));
                false
            }
        }
    }

    /// Move a song to `position` (0-based, clamped to the list) and persist
    /// the new order. The list is renumbered 0..n before the request goes
    /// out; if the backend rejects it the previous list comes back.
    pub async fn move_song(&self, song_id: i64, position: usize) -> bool {
        let previous = self.songs.get();
        let Some(from) = previous.iter().position(|s| s.id == song_id) else {
            return false;
        };
        let to = position.min(previous.len() - 1);
        if from == to {
            return false;
        }

        let mut reordered = previous.clone();
        let song = reordered.remove(from);
        reordered.insert(to, song);
        let updates = renumber(&mut reordered);
        self.songs.set(reordered);

        match self.songs_api.update_order(self.concert_id, &updates).await {
            Ok(_) => true,
            Err(e) => {
                self.songs.set(previous);
                self.error.set(Some(e.user_message(REORDER_FAILED)));
                false
            }
        }
    }

    pub fn go_back(&self) {
        self.router.navigate(Route::Concerts);
    }
}

/// Give each song its index as `order` and collect the updates to send.
fn renumber(songs: &mut [Song]) -> Vec<SongOrderUpdate> {
    songs
        .iter_mut()
        .enumerate()
        .map(|(index, song)| {
            song.order = index as i64;
            SongOrderUpdate {
                song_id: song.id,
                order: song.order,
            }
        })
        .collect()
}
