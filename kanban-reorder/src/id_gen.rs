//! Identity generation for newly created containers and items

use crate::types::{Board, ContainerId, ItemId, CONTAINER_PREFIX, ITEM_PREFIX};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh, kind-tagged, globally unique ids
pub trait IdGenerator: Send + Sync {
    fn container_id(&self) -> ContainerId;
    fn item_id(&self) -> ItemId;
}

/// Random v4 UUID suffixes: `container-<uuid>`, `item-<uuid>`
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn container_id(&self) -> ContainerId {
        ContainerId::with_suffix(Uuid::new_v4())
    }

    fn item_id(&self) -> ItemId {
        ItemId::with_suffix(Uuid::new_v4())
    }
}

/// Counter suffixes shared across both kinds: `container-1`, `item-2`, ...
///
/// Deterministic, for scripted replays and tests.
#[derive(Debug)]
pub struct SequentialGenerator {
    next: AtomicU64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Continue numbering above every counter suffix already on `board`
    pub fn after(board: &Board) -> Self {
        let containers = board
            .containers
            .iter()
            .filter_map(|c| counter_suffix(c.id.as_str(), CONTAINER_PREFIX));
        let items = board
            .containers
            .iter()
            .flat_map(|c| &c.items)
            .filter_map(|i| counter_suffix(i.id.as_str(), ITEM_PREFIX));
        let highest = containers.chain(items).max().unwrap_or(0);
        Self::starting_at(highest.saturating_add(1))
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialGenerator {
    fn container_id(&self) -> ContainerId {
        ContainerId::with_suffix(self.bump())
    }

    fn item_id(&self) -> ItemId {
        ItemId::with_suffix(self.bump())
    }
}

fn counter_suffix(id: &str, prefix: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.parse().ok()
}
