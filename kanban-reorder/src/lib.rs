//! Drag-and-drop reorder engine for a two-level kanban board
//!
//! A board is an ordered list of containers (columns), each holding an ordered list of
//! items (cards). This crate turns a drag gesture (start, moves, end) into new board
//! arrangements and commits them atomically. Rendering, hit-testing geometry and
//! authentication live outside; storage is reached through [`persist::BoardSink`].
//!
//! ## Overview
//!
//! - **Tagged ids** - every id carries `container-` or `item-` as a prefix; raw ids are
//!   classified once into [`EntityId`]
//! - **Pure planning** - [`plan_move`] maps `(board, source, target)` to a new board or a
//!   no-op, and is used for both live previews and the final drop
//! - **Single writer** - [`BoardEngine`] owns the [`BoardStore`] and is the only thing
//!   that replaces the board
//! - **Never fails mid-drag** - misses and malformed events become [`DragOutcome`]s
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_reorder::{
//!     container::AddContainer, item::AddItem, Board, BoardEngine, DragEvent, EngineConfig,
//! };
//!
//! # fn example() -> kanban_reorder::Result<()> {
//! let mut engine = BoardEngine::new(Board::new(), EngineConfig::default())?;
//! let todo = engine.apply_intent(&AddContainer::new("To Do"))?.unwrap();
//! let done = engine.apply_intent(&AddContainer::new("Done"))?.unwrap();
//! let task = engine
//!     .apply_intent(&AddItem::new(todo.as_str(), "Write docs"))?
//!     .unwrap();
//!
//! engine.handle_drag(DragEvent::start(task.as_str()));
//! engine.handle_drag(DragEvent::move_over(done.as_str()));
//! engine.handle_drag(DragEvent::end_over(done.as_str()));
//!
//! assert_eq!(engine.board().containers[1].items[0].title, "Write docs");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod drag;
mod engine;
mod error;
pub mod hit;
pub mod id_gen;
pub mod intent;
pub mod persist;
pub mod planner;
mod store;
pub mod types;

// Command modules
pub mod container;
pub mod item;

pub use config::{EngineConfig, PersistenceConfig};
pub use drag::{DragEvent, DragOutcome, DragSession, IgnoreReason};
pub use engine::{BoardEngine, BoardObserver, Preview};
pub use error::{ReorderError, Result};
pub use hit::{resolve_entity, resolve_hit, Hit};
pub use id_gen::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use intent::{Applied, Intent, Mutation};
pub use planner::{plan_move, MoveKind, MovePlan, NoOpReason};
pub use store::{validate, BoardStore};

// Re-export commonly used types
pub use types::{Board, Container, ContainerId, EntityId, Item, ItemId};
