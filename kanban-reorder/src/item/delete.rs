//! DeleteItem command

use crate::error::{ReorderError, Result};
use crate::id_gen::IdGenerator;
use crate::intent::{Applied, Mutation};
use crate::types::{Board, ContainerId, ItemId};
use serde::{Deserialize, Serialize};

/// Remove an item from the container that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItem {
    /// The owning container
    pub container: ContainerId,
    /// The item ID to delete
    pub id: ItemId,
}

impl DeleteItem {
    /// Create a new DeleteItem command
    pub fn new(container: impl Into<ContainerId>, id: impl Into<ItemId>) -> Self {
        Self {
            container: container.into(),
            id: id.into(),
        }
    }
}

impl Mutation for DeleteItem {
    fn op_string(&self) -> String {
        "delete item".into()
    }

    fn apply(&self, board: &Board, _ids: &dyn IdGenerator) -> Result<Applied> {
        let (container_index, item_index) = locate(board, &self.container, &self.id)?;

        let mut next = board.clone();
        next.containers[container_index].items.remove(item_index);
        Ok(Applied::board(next))
    }
}

/// Find an item inside a specific container
pub(crate) fn locate(
    board: &Board,
    container: &ContainerId,
    item: &ItemId,
) -> Result<(usize, usize)> {
    let container_index =
        board
            .container_index(container)
            .ok_or_else(|| ReorderError::ContainerNotFound {
                id: container.to_string(),
            })?;
    let item_index = board.containers[container_index]
        .item_index(item)
        .ok_or_else(|| ReorderError::ItemNotFound {
            id: item.to_string(),
        })?;
    Ok((container_index, item_index))
}
