//! In-memory sink

use super::{BoardSink, UserKey};
use crate::error::{ReorderError, Result};
use crate::types::Board;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Keeps boards in a map and counts writes. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    boards: Arc<Mutex<HashMap<String, Board>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `store` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }

    /// Latest stored board for a user key
    pub fn get(&self, key: &str) -> Option<Board> {
        self.boards.lock().ok().and_then(|b| b.get(key).cloned())
    }
}

#[async_trait]
impl BoardSink for MemorySink {
    async fn store(&self, user: &UserKey, board: &Board) -> Result<()> {
        let mut boards = self
            .boards
            .lock()
            .map_err(|_| std::io::Error::other("memory sink poisoned"))?;
        boards.insert(user.key.clone(), board.clone());
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }

    async fn load(&self, user: &UserKey) -> Result<Board> {
        self.get(&user.key).ok_or_else(|| ReorderError::NotStored {
            path: PathBuf::from(&user.key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink() {
        let sink = MemorySink::new();
        let user = UserKey::from_email("ada@example.com");
        assert!(sink.load(&user).await.is_err());

        sink.store(&user, &Board::new()).await.unwrap();
        assert_eq!(sink.write_count(), 1);
        assert_eq!(sink.clone().load(&user).await.unwrap(), Board::new());
    }
}
