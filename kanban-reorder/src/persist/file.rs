//! JSON file sink: one room file per user

use super::{BoardSink, RoomRecord, UserKey};
use crate::error::{ReorderError, Result};
use crate::types::Board;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores each user's room as `<root>/rooms/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    root: PathBuf,
}

impl JsonFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to a user's room file
    pub fn room_path(&self, user: &UserKey) -> PathBuf {
        self.root.join("rooms").join(format!("{}.json", user.key))
    }

    /// Read the whole room record for a user
    pub async fn read_record(&self, user: &UserKey) -> Result<RoomRecord> {
        let path = self.room_path(user);
        if !path.exists() {
            return Err(ReorderError::NotStored { path });
        }
        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl BoardSink for JsonFileSink {
    async fn store(&self, user: &UserKey, board: &Board) -> Result<()> {
        let path = self.room_path(user);
        let record = RoomRecord::owned_by(user, board.clone());
        write_record(&path, &record).await?;
        debug!(path = %path.display(), "stored room");
        Ok(())
    }

    async fn load(&self, user: &UserKey) -> Result<Board> {
        Ok(self.read_record(user).await?.data)
    }
}

/// Stage the record next to its final path, then swap it in with a rename.
/// A failed rename leaves the previous record in place and removes the staged copy.
async fn write_record(path: &Path, record: &RoomRecord) -> Result<()> {
    let content = serde_json::to_vec_pretty(record)?;
    if let Some(rooms) = path.parent() {
        fs::create_dir_all(rooms).await?;
    }

    let staged = path.with_extension("json.partial");
    fs::write(&staged, &content).await?;
    if let Err(e) = fs::rename(&staged, path).await {
        let _ = fs::remove_file(&staged).await;
        return Err(e.into());
    }
    Ok(())
}
