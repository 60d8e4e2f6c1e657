#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use setlist::api::{AuthApi, ConcertsApi, SongsApi};
use setlist::error::Result;
use setlist::models::{
    Concert, Deleted, LoginResponse, NewConcert, NewSong, Song, SongOrderUpdate, Updated, User,
};
use setlist::SetlistError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A request as the stub server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Minimal HTTP/1.1 server answering canned responses per (method, path).
pub struct StubServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&'static str, &'static str, u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let routes = Arc::new(routes);

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                let routes = routes.clone();
                tokio::spawn(async move {
                    let Some(request) = read_request(&mut socket).await else {
                        return;
                    };
                    let (status, body) = routes
                        .iter()
                        .find(|(m, p, _, _)| *m == request.method && *p == request.path)
                        .map(|(_, _, s, b)| (*s, *b))
                        .unwrap_or((404, r#"{"error":"no route"}"#));
                    recorded.lock().unwrap().push(request);

                    let response = format!(
                        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<Recorded> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();

    let length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    while buffer.len() < header_end + length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }
    let end = (header_end + length).min(buffer.len());
    let body = String::from_utf8_lossy(&buffer[header_end..end]).to_string();

    Some(Recorded {
        method,
        path,
        headers,
        body,
    })
}

pub fn api_error(status: u16, message: &str) -> SetlistError {
    SetlistError::Api {
        status,
        message: Some(message.to_string()),
    }
}

pub fn concert(id: i64, title: &str) -> Concert {
    Concert {
        id,
        title: title.to_string(),
        date: "2025-03-01".to_string(),
        location: "Oslo".to_string(),
        owner_id: 1,
    }
}

pub fn song(id: i64, concert_id: i64, title: &str, order: i64) -> Song {
    Song {
        id,
        title: title.to_string(),
        notes: String::new(),
        concert_id,
        order,
    }
}

/// In-memory backend. Each endpoint returns its configured result and every
/// call is logged as "METHOD path".
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Mutex<Vec<String>>,
    pub login_result: Mutex<Option<Result<LoginResponse>>>,
    pub register_result: Mutex<Option<Result<Value>>>,
    pub concerts: Mutex<Vec<Concert>>,
    pub songs: Mutex<Vec<Song>>,
    pub fail_list: Mutex<Option<SetlistError>>,
    pub fail_remove: Mutex<Option<SetlistError>>,
    pub fail_add: Mutex<Option<SetlistError>>,
    pub fail_order: Mutex<Option<SetlistError>>,
    pub fail_get: Mutex<Option<SetlistError>>,
    pub order_updates: Mutex<Vec<Vec<SongOrderUpdate>>>,
    next_id: Mutex<i64>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: Mutex::new(100),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    pub fn login_ok(&self, token: &str, username: &str) {
        *self.login_result.lock().unwrap() = Some(Ok(LoginResponse {
            token: token.to_string(),
            user: User {
                id: 1,
                username: username.to_string(),
            },
        }));
    }
}

#[async_trait]
impl AuthApi for FakeBackend {
    async fn register(&self, username: &str, _password: &str) -> Result<Value> {
        self.record(format!("POST /register {}", username));
        self.register_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(serde_json::json!({"message": "registered"})))
    }

    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse> {
        self.record(format!("POST /login {}", username));
        self.login_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(api_error(401, "invalid credentials")))
    }
}

#[async_trait]
impl ConcertsApi for FakeBackend {
    async fn list(&self) -> Result<Vec<Concert>> {
        self.record("GET /concerts".to_string());
        if let Some(e) = self.fail_list.lock().unwrap().take() {
            return Err(e);
        }
        Ok(self.concerts.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Concert> {
        self.record(format!("GET /concerts/{}", id));
        if let Some(e) = self.fail_get.lock().unwrap().take() {
            return Err(e);
        }
        self.concerts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| api_error(404, "concert not found"))
    }

    async fn add(&self, new: &NewConcert) -> Result<Concert> {
        self.record("POST /concerts".to_string());
        if let Some(e) = self.fail_add.lock().unwrap().take() {
            return Err(e);
        }
        let created = Concert {
            id: self.next_id(),
            title: new.title.clone(),
            date: new.date.clone(),
            location: new.location.clone(),
            owner_id: 1,
        };
        self.concerts.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn remove(&self, id: i64) -> Result<Deleted> {
        self.record(format!("DELETE /concerts/{}", id));
        if let Some(e) = self.fail_remove.lock().unwrap().take() {
            return Err(e);
        }
        self.concerts.lock().unwrap().retain(|c| c.id != id);
        Ok(Deleted { deleted: id })
    }
}

#[async_trait]
impl SongsApi for FakeBackend {
    async fn list(&self, concert_id: i64) -> Result<Vec<Song>> {
        self.record(format!("GET /concerts/{}/songs", concert_id));
        if let Some(e) = self.fail_list.lock().unwrap().take() {
            return Err(e);
        }
        let mut songs = self.songs.lock().unwrap().clone();
        songs.sort_by_key(|s| (s.order, s.id));
        Ok(songs)
    }

    async fn create(&self, concert_id: i64, new: &NewSong) -> Result<Song> {
        self.record(format!("POST /concerts/{}/songs {}", concert_id, new.title));
        if let Some(e) = self.fail_add.lock().unwrap().take() {
            return Err(e);
        }
        let order = self
            .songs
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.concert_id == concert_id)
            .map(|s| s.order)
            .max()
            .map_or(0, |max| max + 1);
        let created = Song {
            id: self.next_id(),
            title: new.title.clone(),
            notes: new.notes.clone(),
            concert_id,
            order,
        };
        self.songs.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, concert_id: i64, song_id: i64) -> Result<Deleted> {
        self.record(format!("DELETE /concerts/{}/songs/{}", concert_id, song_id));
        if let Some(e) = self.fail_remove.lock().unwrap().take() {
            return Err(e);
        }
        self.songs.lock().unwrap().retain(|s| s.id != song_id);
        Ok(Deleted { deleted: song_id })
    }

    async fn update_order(&self, concert_id: i64, updates: &[SongOrderUpdate]) -> Result<Updated> {
        self.record(format!("PUT /concerts/{}/songs/order", concert_id));
        if let Some(e) = self.fail_order.lock().unwrap().take() {
            return Err(e);
        }
        self.order_updates.lock().unwrap().push(updates.to_vec());
        let mut songs = self.songs.lock().unwrap();
        for update in updates {
            if let Some(song) = songs.iter_mut().find(|s| s.id == update.song_id) {
                song.order = update.order;
            }
        }
        Ok(Updated {
            updated: updates.len() as i64,
        })
    }
}
