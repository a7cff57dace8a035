//! DeleteContainer command

use crate::error::{ReorderError, Result};
use crate::id_gen::IdGenerator;
use crate::intent::{Applied, Mutation};
use crate::types::{Board, ContainerId};
use serde::{Deserialize, Serialize};

/// Remove a container along with every item it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteContainer {
    /// The container ID to delete
    pub id: ContainerId,
}

impl DeleteContainer {
    /// Create a new DeleteContainer command
    pub fn new(id: impl Into<ContainerId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteContainer {
    fn op_string(&self) -> String {
        "delete container".into()
    }

    fn apply(&self, board: &Board, _ids: &dyn IdGenerator) -> Result<Applied> {
        let index = board
            .container_index(&self.id)
            .ok_or_else(|| ReorderError::ContainerNotFound {
                id: self.id.to_string(),
            })?;

        let mut next = board.clone();
        next.containers.remove(index);
        Ok(Applied::board(next))
    }
}
