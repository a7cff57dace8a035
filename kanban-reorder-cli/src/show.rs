//! `show` command: print a stored board

use anyhow::{Context, Result};
use kanban_reorder::persist::{BoardSink, JsonFileSink, UserKey};
use kanban_reorder::{Board, EngineConfig};

/// Load the stored board for `email` from the configured store directory
pub async fn run_show(email: &str, config: &EngineConfig) -> Result<Board> {
    let sink = JsonFileSink::new(&config.persistence.dir);
    let user = UserKey::from_email(email);
    sink.load(&user)
        .await
        .with_context(|| format!("no board for {email} under {}", sink.root().display()))
}
