use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Deleted, NewSong, Song, SongOrderUpdate, Updated};
use async_trait::async_trait;

#[async_trait]
pub trait SongsApi: Send + Sync {
    async fn list(&self, concert_id: i64) -> Result<Vec<Song>>;

    async fn create(&self, concert_id: i64, song: &NewSong) -> Result<Song>;

    async fn delete(&self, concert_id: i64, song_id: i64) -> Result<Deleted>;

    async fn update_order(&self, concert_id: i64, updates: &[SongOrderUpdate]) -> Result<Updated>;
}

#[async_trait]
impl SongsApi for ApiClient {
    async fn list(&self, concert_id: i64) -> Result<Vec<Song>> {
        let path = format!("/concerts/{}/songs", concert_id);
        let list: Option<Vec<Song>> = self.get(&path).await?;
        Ok(list.unwrap_or_default())
    }

    async fn create(&self, concert_id: i64, song: &NewSong) -> Result<Song> {
        self.post(&format!("/concerts/{}/songs", concert_id), song)
            .await
    }

    async fn delete(&self, concert_id: i64, song_id: i64) -> Result<Deleted> {
        ApiClient::delete(self, &format!("/concerts/{}/songs/{}", concert_id, song_id)).await
    }

    async fn update_order(&self, concert_id: i64, updates: &[SongOrderUpdate]) -> Result<Updated> {
        self.put(&format!("/concerts/{}/songs/order", concert_id), updates)
            .await
    }
}
