//! BoardStore - the single owner of the canonical board
//!
//! The store holds exactly one [`Board`] value. Readers get shared references;
//! writers hand in a complete replacement board through [`BoardStore::apply_mutation`].
//! There is no cell-level mutation API.

use crate::error::{ReorderError, Result};
use crate::types::{Board, Container, EntityId};
use std::collections::HashSet;
use tracing::{error, trace};

/// Canonical board state plus a revision counter bumped on every replacement
#[derive(Debug, Default)]
pub struct BoardStore {
    board: Board,
    revision: u64,
}

impl BoardStore {
    /// Create a store around an initial board.
    ///
    /// The board is validated the same way a replacement would be.
    pub fn new(board: Board) -> Result<Self> {
        validate(&board)?;
        Ok(Self { board, revision: 0 })
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of replacements applied since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Container lookup keyed by kind; see [`Board::find_container_of`]
    pub fn find_container_of(&self, id: &EntityId) -> Option<&Container> {
        self.board.find_container_of(id)
    }

    /// Replace the board atomically.
    ///
    /// The replacement is checked for id tagging and uniqueness first. On failure
    /// the previous board stays in place and the error is returned.
    pub fn apply_mutation(&mut self, board: Board) -> Result<u64> {
        if let Err(e) = validate(&board) {
            error!(error = %e, "rejected board replacement");
            return Err(e);
        }
        self.board = board;
        self.revision += 1;
        trace!(revision = self.revision, "board replaced");
        Ok(self.revision)
    }

    /// Consume the store, returning the board
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Check the structural invariants every committed board must hold
pub fn validate(board: &Board) -> Result<()> {
    let mut containers = HashSet::new();
    let mut items = HashSet::new();

    for container in &board.containers {
        if !container.id.is_well_formed() {
            return Err(ReorderError::invalid_value(
                "container id",
                format!("'{}' is not tagged as a container", container.id),
            ));
        }
        if !containers.insert(&container.id) {
            return Err(ReorderError::duplicate_id("container", container.id.as_str()));
        }
        for item in &container.items {
            if !item.id.is_well_formed() {
                return Err(ReorderError::invalid_value(
                    "item id",
                    format!("'{}' is not tagged as an item", item.id),
                ));
            }
            if !items.insert(&item.id) {
                return Err(ReorderError::duplicate_id("item", item.id.as_str()));
            }
        }
    }
    Ok(())
}
