//! Direct (non-drag) board mutations
//!
//! Each mutation lives in its own file under `container/` or `item/` and implements
//! [`Mutation`]. [`Intent`] is the serializable sum of all of them, used by callers
//! that receive intents as data.

use crate::container::{AddContainer, DeleteContainer, RenameContainer};
use crate::error::{ReorderError, Result};
use crate::id_gen::IdGenerator;
use crate::item::{AddItem, DeleteItem, RenameItem};
use crate::types::{Board, EntityId};
use serde::{Deserialize, Serialize};

/// Board produced by a mutation, plus the id it created if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub board: Board,
    pub created: Option<EntityId>,
}

impl Applied {
    pub fn board(board: Board) -> Self {
        Self {
            board,
            created: None,
        }
    }

    pub fn created(board: Board, id: impl Into<EntityId>) -> Self {
        Self {
            board,
            created: Some(id.into()),
        }
    }
}

/// A pure board-to-board mutation
pub trait Mutation {
    /// Operation name, e.g. `"add item"`
    fn op_string(&self) -> String;

    /// Produce the replacement board
    fn apply(&self, board: &Board, ids: &dyn IdGenerator) -> Result<Applied>;
}

/// All direct mutations, tagged by `op`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    AddContainer(AddContainer),
    AddItem(AddItem),
    DeleteContainer(DeleteContainer),
    DeleteItem(DeleteItem),
    RenameContainer(RenameContainer),
    RenameItem(RenameItem),
}

impl Intent {
    fn as_mutation(&self) -> &dyn Mutation {
        match self {
            Self::AddContainer(m) => m,
            Self::AddItem(m) => m,
            Self::DeleteContainer(m) => m,
            Self::DeleteItem(m) => m,
            Self::RenameContainer(m) => m,
            Self::RenameItem(m) => m,
        }
    }
}

impl Mutation for Intent {
    fn op_string(&self) -> String {
        self.as_mutation().op_string()
    }

    fn apply(&self, board: &Board, ids: &dyn IdGenerator) -> Result<Applied> {
        self.as_mutation().apply(board, ids)
    }
}

macro_rules! intent_from {
    ($($variant:ident),*) => {
        $(impl From<$variant> for Intent {
            fn from(m: $variant) -> Self {
                Self::$variant(m)
            }
        })*
    };
}

intent_from!(
    AddContainer,
    AddItem,
    DeleteContainer,
    DeleteItem,
    RenameContainer,
    RenameItem
);

/// Reject titles that are empty once trimmed
pub(crate) fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ReorderError::missing_field("title"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_gen::SequentialGenerator;

    #[test]
    fn test_intent_json_shape() {
        let intent: Intent =
            serde_json::from_str(r#"{"op":"add_item","container":"container-1","title":"Write docs"}"#)
                .unwrap();
        assert_eq!(intent, AddItem::new("container-1", "Write docs").into());
        assert_eq!(intent.op_string(), "add item");
    }

    #[test]
    fn test_intent_dispatch() {
        let ids = SequentialGenerator::new();
        let intent: Intent = AddContainer::new("Backlog").into();
        let applied = intent.apply(&Board::new(), &ids).unwrap();
        assert_eq!(applied.board.containers.len(), 1);
        assert_eq!(applied.created, EntityId::parse("container-1"));
    }

    #[test]
    fn test_require_title() {
        assert!(require_title("ok").is_ok());
        assert!(matches!(
            require_title("   "),
            Err(ReorderError::MissingField { .. })
        ));
    }
}
