//! RenameItem command

use super::delete::locate;
use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::intent::{require_title, Applied, Mutation};
use crate::types::{Board, ContainerId, ItemId};
use serde::{Deserialize, Serialize};

/// Change an item's title in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameItem {
    /// The owning container
    pub container: ContainerId,
    /// The item ID to rename
    pub id: ItemId,
    /// New title
    pub title: String,
}

impl RenameItem {
    /// Create a new RenameItem command
    pub fn new(
        container: impl Into<ContainerId>,
        id: impl Into<ItemId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            container: container.into(),
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Mutation for RenameItem {
    fn op_string(&self) -> String {
        "rename item".into()
    }

    fn apply(&self, board: &Board, _ids: &dyn IdGenerator) -> Result<Applied> {
        require_title(&self.title)?;
        let (container_index, item_index) = locate(board, &self.container, &self.id)?;

        let mut next = board.clone();
        next.containers[container_index].items[item_index].title = self.title.clone();
        Ok(Applied::board(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReorderError;
    use crate::id_gen::SequentialGenerator;
    use crate::types::{Container, Item};

    #[test]
    fn test_rename_item() {
        let board = Board::new().with_container(
            Container::new("container-a", "A")
                .with_item(Item::new("item-x", "x"))
                .with_item(Item::new("item-y", "y")),
        );
        let applied = RenameItem::new("container-a", "item-y", "Ship it")
            .apply(&board, &SequentialGenerator::new())
            .unwrap();

        let items = &applied.board.containers[0].items;
        assert_eq!(items[1].title, "Ship it");
        assert_eq!(items[1].id.as_str(), "item-y");
        assert_eq!(items[0], board.containers[0].items[0]);
    }

    #[test]
    fn test_rename_missing_item() {
        let board = Board::new().with_container(Container::new("container-a", "A"));
        let result = RenameItem::new("container-a", "item-nope", "x")
            .apply(&board, &SequentialGenerator::new());
        assert!(matches!(result, Err(ReorderError::ItemNotFound { .. })));
    }
}
