//! Board-level types: Board, Container, Item

use super::ids::{ContainerId, EntityId, ItemId};
use serde::{Deserialize, Serialize};

/// The whole board: containers in left-to-right order.
///
/// Values are replaced wholesale by [`crate::BoardStore::apply_mutation`]; every
/// move and intent produces a new `Board` rather than editing one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// A column holding an ordered list of items. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A card on the board, owned by exactly one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from containers in display order
    pub fn from_containers(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    /// Builder-style append of a container
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Find a container by id
    pub fn find_container(&self, id: &ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| &c.id == id)
    }

    /// Index of a container in board order
    pub fn container_index(&self, id: &ContainerId) -> Option<usize> {
        self.containers.iter().position(|c| &c.id == id)
    }

    /// Find the container that owns an item
    pub fn find_owner(&self, item: &ItemId) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.items.iter().any(|i| &i.id == item))
    }

    /// Locate an item as `(container index, item index)`
    pub fn locate_item(&self, item: &ItemId) -> Option<(usize, usize)> {
        self.containers.iter().enumerate().find_map(|(ci, c)| {
            c.item_index(item).map(|ii| (ci, ii))
        })
    }

    /// Find an item anywhere on the board
    pub fn find_item(&self, item: &ItemId) -> Option<&Item> {
        self.locate_item(item)
            .map(|(ci, ii)| &self.containers[ci].items[ii])
    }

    /// Container lookup keyed by kind.
    ///
    /// A container id returns that container; an item id returns the container
    /// owning the item.
    pub fn find_container_of(&self, id: &EntityId) -> Option<&Container> {
        match id {
            EntityId::Container(id) => self.find_container(id),
            EntityId::Item(id) => self.find_owner(id),
        }
    }

    /// All item ids, container by container, in display order
    pub fn item_ids(&self) -> Vec<&ItemId> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter().map(|i| &i.id))
            .collect()
    }

    /// Total number of items across all containers
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl Container {
    /// Create an empty container
    pub fn new(id: impl Into<ContainerId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Builder-style append of an item
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Index of an item within this container
    pub fn item_index(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
