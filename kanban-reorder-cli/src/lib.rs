//! Command-line front end for `kanban-reorder`
//!
//! - `kanban-reorder replay --script <steps.json>`: run drag events and intents, print the board
//! - `kanban-reorder show --user <email>`: print the stored board for a user

pub mod cli;
pub mod logging;
pub mod replay;
pub mod show;

pub use cli::{Cli, Commands, ReplayArgs};
