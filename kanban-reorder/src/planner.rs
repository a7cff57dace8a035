//! Move planning: source + target locations to a new board
//!
//! [`plan_move`] is a pure function of the current board and two resolved hits. It
//! picks one of four moves, or a no-op, and returns the complete replacement board.
//! The same function serves live drag-move events and the final drop, so preview
//! and commit can never disagree.
//!
//! | source    | target    | same container | move                         |
//! |-----------|-----------|----------------|------------------------------|
//! | item      | item      | yes            | [`MoveKind::ReorderItem`]    |
//! | item      | item      | no             | [`MoveKind::CrossMoveIndexed`] |
//! | item      | container | -              | [`MoveKind::CrossMoveAppend`] |
//! | container | container | -              | [`MoveKind::ReorderContainer`] |
//! | container | item      | -              | no-op                        |
//! | any       | none/self | -              | no-op                        |

use crate::hit::{ContainerSlot, Hit, ItemSlot};
use crate::types::{Board, ContainerId};
use std::fmt;

/// Which of the four moves was planned, with the indices it used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveKind {
    /// Container moved within the board's container order
    ReorderContainer { from: usize, to: usize },
    /// Item moved within its own container
    ReorderItem {
        container: ContainerId,
        from: usize,
        to: usize,
    },
    /// Item moved into another container at the target item's index
    CrossMoveIndexed {
        from_container: ContainerId,
        to_container: ContainerId,
        from: usize,
        to: usize,
    },
    /// Item appended to the end of a container
    CrossMoveAppend {
        from_container: ContainerId,
        to_container: ContainerId,
        from: usize,
        to: usize,
    },
}

impl MoveKind {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReorderContainer { .. } => "reorder container",
            Self::ReorderItem { .. } => "reorder item",
            Self::CrossMoveIndexed { .. } => "cross move indexed",
            Self::CrossMoveAppend { .. } => "cross move append",
        }
    }

    pub fn is_container_move(&self) -> bool {
        matches!(self, Self::ReorderContainer { .. })
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a plan left the board alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The dragged id is not on the board
    SourceMissing,
    /// Nothing resolvable under the pointer
    NoTarget,
    /// Dropped onto itself
    SameId,
    /// A container cannot go into an item
    ContainerOntoItem,
    /// The planned board equals the current one
    Unchanged,
}

/// Result of planning a single drag step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovePlan {
    NoOp(NoOpReason),
    Apply { kind: MoveKind, board: Board },
}

impl MovePlan {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }

    /// The move kind, if this plan changes the board
    pub fn kind(&self) -> Option<&MoveKind> {
        match self {
            Self::Apply { kind, .. } => Some(kind),
            Self::NoOp(_) => None,
        }
    }

    /// The board after this plan, falling back to `current` for no-ops
    pub fn board_or<'a>(&'a self, current: &'a Board) -> &'a Board {
        match self {
            Self::Apply { board, .. } => board,
            Self::NoOp(_) => current,
        }
    }
}

/// Plan one drag step against the current board.
///
/// Hits that do not describe `board` (resolved against another board value) are
/// treated as misses.
pub fn plan_move(board: &Board, source: &Hit, target: &Hit) -> MovePlan {
    if !on_board(board, source) {
        return MovePlan::NoOp(NoOpReason::SourceMissing);
    }
    if !on_board(board, target) {
        return MovePlan::NoOp(NoOpReason::NoTarget);
    }
    let (kind, next) = match (source, target) {
        (Hit::None, _) => return MovePlan::NoOp(NoOpReason::SourceMissing),
        (_, Hit::None) => return MovePlan::NoOp(NoOpReason::NoTarget),
        (Hit::Container(_), Hit::Item(_)) => {
            return MovePlan::NoOp(NoOpReason::ContainerOntoItem)
        }
        (Hit::Container(src), Hit::Container(dst)) => {
            if src.id == dst.id {
                return MovePlan::NoOp(NoOpReason::SameId);
            }
            reorder_container(board, src, dst)
        }
        (Hit::Item(src), Hit::Item(dst)) => {
            if src.id == dst.id {
                return MovePlan::NoOp(NoOpReason::SameId);
            }
            if src.container_index == dst.container_index {
                reorder_item(board, src, dst)
            } else {
                cross_move_indexed(board, src, dst)
            }
        }
        (Hit::Item(src), Hit::Container(dst)) => cross_move_append(board, src, dst),
    };

    if &next == board {
        MovePlan::NoOp(NoOpReason::Unchanged)
    } else {
        MovePlan::Apply { kind, board: next }
    }
}

/// Whether `hit` names the entity actually sitting at its indices
fn on_board(board: &Board, hit: &Hit) -> bool {
    match hit {
        Hit::None => true,
        Hit::Container(slot) => board
            .containers
            .get(slot.index)
            .is_some_and(|c| c.id == slot.id),
        Hit::Item(slot) => board
            .containers
            .get(slot.container_index)
            .filter(|c| c.id == slot.container)
            .and_then(|c| c.items.get(slot.index))
            .is_some_and(|i| i.id == slot.id),
    }
}

/// Remove the element at `from` and re-insert it at `to`
pub fn array_move<T>(values: &mut Vec<T>, from: usize, to: usize) {
    let value = values.remove(from);
    values.insert(to.min(values.len()), value);
}

fn reorder_container(board: &Board, src: &ContainerSlot, dst: &ContainerSlot) -> (MoveKind, Board) {
    let mut next = board.clone();
    array_move(&mut next.containers, src.index, dst.index);
    (
        MoveKind::ReorderContainer {
            from: src.index,
            to: dst.index,
        },
        next,
    )
}

fn reorder_item(board: &Board, src: &ItemSlot, dst: &ItemSlot) -> (MoveKind, Board) {
    let mut next = board.clone();
    array_move(
        &mut next.containers[src.container_index].items,
        src.index,
        dst.index,
    );
    (
        MoveKind::ReorderItem {
            container: src.container.clone(),
            from: src.index,
            to: dst.index,
        },
        next,
    )
}

fn cross_move_indexed(board: &Board, src: &ItemSlot, dst: &ItemSlot) -> (MoveKind, Board) {
    let mut next = board.clone();
    let item = next.containers[src.container_index].items.remove(src.index);
    let target = &mut next.containers[dst.container_index].items;
    target.insert(dst.index.min(target.len()), item);
    (
        MoveKind::CrossMoveIndexed {
            from_container: src.container.clone(),
            to_container: dst.container.clone(),
            from: src.index,
            to: dst.index,
        },
        next,
    )
}

fn cross_move_append(board: &Board, src: &ItemSlot, dst: &ContainerSlot) -> (MoveKind, Board) {
    let mut next = board.clone();
    let item = next.containers[src.container_index].items.remove(src.index);
    let target = &mut next.containers[dst.index].items;
    target.push(item);
    let to = target.len() - 1;
    (
        MoveKind::CrossMoveAppend {
            from_container: src.container.clone(),
            to_container: dst.id.clone(),
            from: src.index,
            to,
        },
        next,
    )
}
