//! Hit resolution: raw overlap ids to board locations
//!
//! The presentation layer's collision detection reports which element the pointer
//! overlaps as a raw id string. [`resolve_hit`] classifies that id by its kind prefix
//! and looks up where it currently sits on the board. No geometry happens here.

use crate::types::{Board, ContainerId, EntityId, ItemId};
use tracing::trace;

/// A container and its index in board order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSlot {
    pub id: ContainerId,
    pub index: usize,
}

/// An item, its index within its owner, and the owner's location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSlot {
    pub id: ItemId,
    pub index: usize,
    pub container: ContainerId,
    pub container_index: usize,
}

/// A classified drag location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Container(ContainerSlot),
    Item(ItemSlot),
    /// Nothing under the pointer, an untagged id, or an id no longer on the board
    None,
}

impl Hit {
    /// The id this hit denotes, if any
    pub fn entity_id(&self) -> Option<EntityId> {
        match self {
            Self::Container(slot) => Some(EntityId::Container(slot.id.clone())),
            Self::Item(slot) => Some(EntityId::Item(slot.id.clone())),
            Self::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Resolve a raw overlap id against the current board
pub fn resolve_hit(board: &Board, over: Option<&str>) -> Hit {
    let Some(raw) = over else {
        return Hit::None;
    };
    match EntityId::parse(raw) {
        Some(id) => resolve_entity(board, &id),
        None => {
            trace!(id = raw, "overlap id carries no kind prefix");
            Hit::None
        }
    }
}

/// Resolve an already-classified id against the current board
pub fn resolve_entity(board: &Board, id: &EntityId) -> Hit {
    let hit = match id {
        EntityId::Container(id) => board
            .container_index(id)
            .map(|index| {
                Hit::Container(ContainerSlot {
                    id: id.clone(),
                    index,
                })
            })
            .unwrap_or(Hit::None),
        EntityId::Item(id) => board
            .locate_item(id)
            .map(|(container_index, index)| {
                Hit::Item(ItemSlot {
                    id: id.clone(),
                    index,
                    container: board.containers[container_index].id.clone(),
                    container_index,
                })
            })
            .unwrap_or(Hit::None),
    };
    if hit.is_none() {
        trace!(id = %id, "id not found on board");
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Container, Item};

    fn board() -> Board {
        Board::new()
            .with_container(
                Container::new("container-a", "A")
                    .with_item(Item::new("item-x", "x"))
                    .with_item(Item::new("item-y", "y")),
            )
            .with_container(Container::new("container-b", "B").with_item(Item::new("item-p", "p")))
    }

    #[test]
    fn test_resolve_item() {
        let hit = resolve_hit(&board(), Some("item-p"));
        assert_eq!(
            hit,
            Hit::Item(ItemSlot {
                id: "item-p".into(),
                index: 0,
                container: "container-b".into(),
                container_index: 1,
            })
        );
    }

    #[test]
    fn test_resolve_container() {
        let hit = resolve_hit(&board(), Some("container-b"));
        assert_eq!(
            hit,
            Hit::Container(ContainerSlot {
                id: "container-b".into(),
                index: 1,
            })
        );
    }

    #[test]
    fn test_resolve_misses() {
        let board = board();
        assert!(resolve_hit(&board, None).is_none());
        assert!(resolve_hit(&board, Some("item-gone")).is_none());
        assert!(resolve_hit(&board, Some("container-gone")).is_none());
        assert!(resolve_hit(&board, Some("header")).is_none());
    }

    #[test]
    fn test_entity_id_round_trip() {
        let hit = resolve_hit(&board(), Some("item-y"));
        assert_eq!(hit.entity_id(), EntityId::parse("item-y"));
        assert_eq!(Hit::None.entity_id(), None);
    }
}
