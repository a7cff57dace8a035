//! AddItem command

use crate::error::{ReorderError, Result};
use crate::id_gen::IdGenerator;
use crate::intent::{require_title, Applied, Mutation};
use crate::types::{Board, ContainerId, Item};
use serde::{Deserialize, Serialize};

/// Append a new item to the end of a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    /// The container receiving the item
    pub container: ContainerId,
    /// The item title
    pub title: String,
}

impl AddItem {
    /// Create a new AddItem command
    pub fn new(container: impl Into<ContainerId>, title: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            title: title.into(),
        }
    }
}

impl Mutation for AddItem {
    fn op_string(&self) -> String {
        "add item".into()
    }

    fn apply(&self, board: &Board, ids: &dyn IdGenerator) -> Result<Applied> {
        require_title(&self.title)?;

        let index = board
            .container_index(&self.container)
            .ok_or_else(|| ReorderError::ContainerNotFound {
                id: self.container.to_string(),
            })?;

        let item = Item::new(ids.item_id(), self.title.clone());
        let id = item.id.clone();
        let mut next = board.clone();
        next.containers[index].items.push(item);
        Ok(Applied::created(next, id))
    }
}
