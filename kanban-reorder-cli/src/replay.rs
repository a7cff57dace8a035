//! `replay` command: drive the engine from a script file

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use kanban_reorder::persist::{BoardSink, JsonFileSink, Persister, UserKey};
use kanban_reorder::{
    Board, BoardEngine, DragEvent, EngineConfig, Intent, ReorderError, SequentialGenerator,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cli::ReplayArgs;

/// One scripted step. Drag events carry an `event` tag, intents an `op` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Drag(DragEvent),
    Intent(Intent),
}

/// Read a JSON array of steps
pub fn load_script(path: &Path) -> Result<Vec<Step>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid script {}", path.display()))
}

/// Run the script and return the final board
pub async fn run_replay(args: &ReplayArgs, config: EngineConfig) -> Result<Board> {
    let steps = load_script(&args.script)?;
    let user = args.user.as_deref().map(UserKey::from_email);
    let sink = (config.persistence.enabled && user.is_some())
        .then(|| JsonFileSink::new(&config.persistence.dir));

    let board = initial_board(args.board.as_deref(), sink.as_ref(), user.as_ref()).await?;
    let mut engine = BoardEngine::new(board, config).context("starting board is invalid")?;
    if args.sequential_ids {
        let ids = SequentialGenerator::after(engine.board());
        engine = engine.with_id_generator(Arc::new(ids));
    }
    if let (Some(sink), Some(user)) = (sink, user) {
        engine = engine.with_persister(Persister::spawn(Arc::new(sink), user));
    }

    let result = apply_steps(&mut engine, steps);
    if let Some(persister) = engine.take_persister() {
        persister.shutdown().await;
    }
    result?;

    info!(revision = engine.store().revision(), "replay finished");
    Ok(engine.board().clone())
}

fn apply_steps(engine: &mut BoardEngine, steps: Vec<Step>) -> Result<()> {
    for (n, step) in steps.into_iter().enumerate() {
        match step {
            Step::Drag(event) => {
                let outcome = engine.handle_drag(event);
                debug!(step = n, ?outcome, "drag step");
            }
            Step::Intent(intent) => {
                let created = engine
                    .apply_intent(&intent)
                    .with_context(|| format!("step {n} failed"))?;
                debug!(step = n, created = ?created.map(|id| id.to_string()), "intent step");
            }
        }
    }
    if engine.is_dragging() {
        warn!("script ended with a drag still in progress");
    }
    Ok(())
}

async fn initial_board(
    path: Option<&Path>,
    sink: Option<&JsonFileSink>,
    user: Option<&UserKey>,
) -> Result<Board> {
    if let Some(path) = path {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("invalid board {}", path.display()));
    }
    let (Some(sink), Some(user)) = (sink, user) else {
        return Ok(Board::new());
    };
    match sink.load(user).await {
        Ok(board) => Ok(board),
        Err(ReorderError::NotStored { .. }) => {
            info!(user = %user.key, "no stored board; starting empty");
            Ok(Board::new())
        }
        Err(e) => Err(e).context("failed to load stored board"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_reorder::PersistenceConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SCRIPT: &str = r#"[
        {"op": "add_container", "title": "To Do"},
        {"op": "add_container", "title": "Done"},
        {"op": "add_item", "container": "container-1", "title": "Write docs"},
        {"op": "add_item", "container": "container-1", "title": "Ship"},
        {"event": "start", "active": "item-3"},
        {"event": "move", "over": "container-2"},
        {"event": "end", "over": "container-2"}
    ]"#;

    fn args(dir: &TempDir, user: Option<&str>) -> ReplayArgs {
        let script = dir.path().join("steps.json");
        std::fs::write(&script, SCRIPT).unwrap();
        ReplayArgs {
            script,
            board: None,
            user: user.map(str::to_string),
            sequential_ids: true,
        }
    }

    #[test]
    fn test_step_parsing() {
        let steps: Vec<Step> = serde_json::from_str(SCRIPT).unwrap();
        assert_eq!(steps.len(), 7);
        assert!(matches!(steps[0], Step::Intent(Intent::AddContainer(_))));
        assert_eq!(steps[4], Step::Drag(DragEvent::start("item-3")));
        assert_eq!(
            serde_json::from_str::<Step>(r#"{"event":"cancel"}"#).unwrap(),
            Step::Drag(DragEvent::Cancel)
        );
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        assert!(serde_json::from_str::<Step>(r#"{"event":"hover"}"#).is_err());
        assert!(serde_json::from_str::<Step>(r#"{"op":"archive"}"#).is_err());
    }

    #[tokio::test]
    async fn test_replay_without_persistence() {
        let dir = TempDir::new().unwrap();
        let board = run_replay(&args(&dir, None), EngineConfig::default())
            .await
            .unwrap();

        assert_eq!(board.containers[0].items.len(), 1);
        assert_eq!(board.containers[0].items[0].title, "Ship");
        assert_eq!(board.containers[1].items[0].title, "Write docs");
    }

    #[tokio::test]
    async fn test_replay_persists_and_resumes() {
        let dir = TempDir::new().unwrap();
        let config = EngineConfig {
            persistence: PersistenceConfig {
                enabled: true,
                dir: dir.path().join("store"),
            },
            ..EngineConfig::default()
        };

        let first = run_replay(&args(&dir, Some("ada@example.com")), config.clone())
            .await
            .unwrap();
        let stored = JsonFileSink::new(dir.path().join("store"))
            .load(&UserKey::from_email("ada@example.com"))
            .await
            .unwrap();
        assert_eq!(stored, first);

        // Second run starts from the stored board and only moves the card back
        let script = dir.path().join("back.json");
        std::fs::write(
            &script,
            r#"[{"event":"start","active":"item-3"},{"event":"end","over":"item-4"}]"#,
        )
        .unwrap();
        let resumed = ReplayArgs {
            script,
            board: None,
            user: Some("ada@example.com".to_string()),
            sequential_ids: true,
        };
        let second = run_replay(&resumed, config).await.unwrap();
        assert_eq!(second.containers[0].items.len(), 2);
        assert_eq!(second.containers[0].items[0].id.as_str(), "item-3");
        assert!(second.containers[1].items.is_empty());
    }

    #[tokio::test]
    async fn test_sequential_ids_continue_after_loaded_board() {
        let dir = TempDir::new().unwrap();
        let board = dir.path().join("board.json");
        std::fs::write(
            &board,
            r#"{"containers":[{"id":"container-1","title":"A","items":[{"id":"item-2","title":"x"}]}]}"#,
        )
        .unwrap();
        let script = dir.path().join("add.json");
        std::fs::write(
            &script,
            r#"[{"op":"add_container","title":"B"},{"op":"add_item","container":"container-3","title":"y"}]"#,
        )
        .unwrap();
        let args = ReplayArgs {
            script,
            board: Some(board),
            user: None,
            sequential_ids: true,
        };

        let board = run_replay(&args, EngineConfig::default()).await.unwrap();
        assert_eq!(board.containers.len(), 2);
        assert_eq!(board.containers[1].id.as_str(), "container-3");
        assert_eq!(board.containers[1].items[0].id.as_str(), "item-4");
    }

    #[tokio::test]
    async fn test_failing_intent_names_the_step() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("bad.json");
        std::fs::write(&script, r#"[{"op":"delete_container","id":"container-9"}]"#).unwrap();
        let args = ReplayArgs {
            script,
            board: None,
            user: None,
            sequential_ids: false,
        };
        let err = run_replay(&args, EngineConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("step 0"));
    }

    #[tokio::test]
    async fn test_missing_script() {
        let args = ReplayArgs {
            script: PathBuf::from("/nonexistent/steps.json"),
            board: None,
            user: None,
            sequential_ids: false,
        };
        assert!(run_replay(&args, EngineConfig::default()).await.is_err());
    }
}
