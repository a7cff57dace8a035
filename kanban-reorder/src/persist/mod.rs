//! Persistence boundary
//!
//! The engine never waits on storage. Committed boards are handed to a [`Persister`],
//! which forwards the latest snapshot to a [`BoardSink`] from a background task.
//! Storage failures are logged and never reach the reorder path.

mod file;
mod memory;
mod writer;

pub use file::JsonFileSink;
pub use memory::MemorySink;
pub use writer::Persister;

use crate::error::Result;
use crate::types::Board;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Durable store for a user's board
#[async_trait]
pub trait BoardSink: Send + Sync + 'static {
    /// Write the full board for `user`, replacing whatever was there
    async fn store(&self, user: &UserKey, board: &Board) -> Result<()>;

    /// Read back the board for `user`
    async fn load(&self, user: &UserKey) -> Result<Board>;
}

/// Identity a board is stored under: the user's email and its storage-safe key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserKey {
    pub email: String,
    pub key: String,
}

impl UserKey {
    /// Build a key from an email, replacing `.`, `#`, `$`, `/`, `[` and `]` with `_`
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let key = sanitize_key(&email);
        Self { email, key }
    }
}

/// Replace characters that are not allowed in storage paths/keys
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '.' | '#' | '$' | '/' | '[' | ']' => '_',
            other => other,
        })
        .collect()
}

/// Stored record for one user's board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    pub email: String,
    pub data: Board,
    pub admin: bool,
    pub members: Vec<String>,
}

impl RoomRecord {
    /// A single-member room owned by `user`
    pub fn owned_by(user: &UserKey, board: Board) -> Self {
        Self {
            id: user.key.clone(),
            email: user.email.clone(),
            data: board,
            admin: true,
            members: vec![user.email.clone()],
        }
    }
}
