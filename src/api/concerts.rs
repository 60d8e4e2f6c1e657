use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Concert, Deleted, NewConcert};
use async_trait::async_trait;

#[async_trait]
pub trait ConcertsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Concert>>;

    async fn get(&self, id: i64) -> Result<Concert>;

    async fn add(&self, concert: &NewConcert) -> Result<Concert>;

    async fn remove(&self, id: i64) -> Result<Deleted>;
}

#[async_trait]
impl ConcertsApi for ApiClient {
    async fn list(&self) -> Result<Vec<Concert>> {
        // The backend encodes an empty list as `null`.
        let list: Option<Vec<Concert>> = ApiClient::get(self, "/concerts").await?;
        Ok(list.unwrap_or_default())
    }

    async fn get(&self, id: i64) -> Result<Concert> {
        ApiClient::get(self, &format!("/concerts/{}", id)).await
    }

    async fn add(&self, concert: &NewConcert) -> Result<Concert> {
        self.post("/concerts", concert).await
    }

    async fn remove(&self, id: i64) -> Result<Deleted> {
        self.delete(&format!("/concerts/{}", id)).await
    }
}
