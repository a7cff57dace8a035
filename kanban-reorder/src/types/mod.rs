//! Core types for the reorder engine

mod board;
mod ids;

// Re-export all types
pub use board::{Board, Container, Item};
pub use ids::{ContainerId, EntityId, ItemId, CONTAINER_PREFIX, ITEM_PREFIX};
