// Watcher snapshot client: one JSON document per unix-socket connection

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::net::UnixStream;

use crate::models::WatcherPayload;

#[derive(Debug, Error)]
pub enum WatcherError {
    /// Connect failed, or the connection errored at any point before a
    /// clean close. An error-flagged close lands here too.
    #[error("watcher socket unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    /// The watcher closed cleanly but the accumulated bytes are not a
    /// valid snapshot document.
    #[error("watcher sent malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

pub struct WatcherRepo {
    socket_path: PathBuf,
}

impl WatcherRepo {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Fetches one snapshot. The protocol is a single complete JSON
    /// document written by the watcher, then a close; the client sends
    /// nothing. No timeout: a watcher that never closes hangs the request.
    pub async fn fetch_snapshot(&self) -> Result<WatcherPayload, WatcherError> {
        let mut stream = UnixStream::connect(&self.socket_path).await?;
        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
