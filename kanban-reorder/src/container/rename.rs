//! RenameContainer command

use crate::error::{ReorderError, Result};
use crate::id_gen::IdGenerator;
use crate::intent::{require_title, Applied, Mutation};
use crate::types::{Board, ContainerId};
use serde::{Deserialize, Serialize};

/// Change a container's title. Its id and items are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameContainer {
    /// The container ID to rename
    pub id: ContainerId,
    /// New title
    pub title: String,
}

impl RenameContainer {
    /// Create a new RenameContainer command
    pub fn new(id: impl Into<ContainerId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Mutation for RenameContainer {
    fn op_string(&self) -> String {
        "rename container".into()
    }

    fn apply(&self, board: &Board, _ids: &dyn IdGenerator) -> Result<Applied> {
        require_title(&self.title)?;

        let index = board
            .container_index(&self.id)
            .ok_or_else(|| ReorderError::ContainerNotFound {
                id: self.id.to_string(),
            })?;

        let mut next = board.clone();
        next.containers[index].title = self.title.clone();
        Ok(Applied::board(next))
    }
}
