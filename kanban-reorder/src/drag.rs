//! Drag gesture events and the per-gesture session
//!
//! A well-formed gesture is one `Start`, zero or more `Move`s, then `End` or `Cancel`.
//! Anything else is tolerated: stray moves and ends are ignored, and a second `Start`
//! replaces the running session.

use crate::planner::{MoveKind, NoOpReason};
use crate::types::EntityId;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// An already-classified drag event from the presentation layer.
///
/// `over` is the collision oracle's answer: the raw id of whatever the pointer
/// overlaps, or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        active: String,
    },
    Move {
        #[serde(default)]
        over: Option<String>,
    },
    End {
        #[serde(default)]
        over: Option<String>,
    },
    Cancel,
}

impl DragEvent {
    pub fn start(active: impl Into<String>) -> Self {
        Self::Start {
            active: active.into(),
        }
    }

    pub fn move_over(over: impl Into<String>) -> Self {
        Self::Move {
            over: Some(over.into()),
        }
    }

    pub fn end_over(over: impl Into<String>) -> Self {
        Self::End {
            over: Some(over.into()),
        }
    }

    /// Event name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Move { .. } => "move",
            Self::End { .. } => "end",
            Self::Cancel => "cancel",
        }
    }
}

/// State of one drag gesture
#[derive(Debug, Clone)]
pub struct DragSession {
    active: EntityId,
    started_at: Instant,
    last_event_at: Instant,
    last_applied: Option<EntityId>,
}

impl DragSession {
    pub fn new(active: EntityId, started_at: Instant) -> Self {
        Self {
            active,
            started_at,
            last_event_at: started_at,
            last_applied: None,
        }
    }

    /// The id being dragged
    pub fn active(&self) -> &EntityId {
        &self.active
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// When the session last accepted an event
    pub fn last_event_at(&self) -> Instant {
        self.last_event_at
    }

    pub(crate) fn touch(&mut self, now: Instant) {
        self.last_event_at = self.last_event_at.max(now);
    }

    /// Target of the most recent move this session applied
    pub fn last_applied(&self) -> Option<&EntityId> {
        self.last_applied.as_ref()
    }

    pub(crate) fn record_applied(&mut self, target: EntityId) {
        self.last_applied = Some(target);
    }

    /// Whether the board already reflects a move onto `target`
    pub fn already_applied(&self, target: Option<&EntityId>) -> bool {
        target.is_some() && self.last_applied.as_ref() == target
    }

    /// Whether the session has been idle longer than `timeout` as of `now`
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_event_at) > timeout
    }
}

/// Why a drag event was dropped without planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Move or end arrived with no session running
    NoSession,
    /// The session timed out before this event
    SessionExpired,
    /// Start named an id with no kind prefix
    UntaggedActive,
    /// The planned board failed validation
    Rejected,
}

/// What the engine did with one drag event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A session began
    Started,
    /// A move event changed the board
    Previewed(MoveKind),
    /// A move event changed nothing
    Unchanged(NoOpReason),
    /// A move event targeted what the board already reflects
    AlreadyApplied,
    /// Container reorder held back until the drop
    Deferred,
    /// The gesture ended; carries the move the drop itself applied, if any
    Dropped(Option<MoveKind>),
    /// The gesture was cancelled
    Cancelled,
    /// The event was malformed or stale
    Ignored(IgnoreReason),
}

impl DragOutcome {
    /// Whether this outcome replaced the board
    pub fn changed_board(&self) -> bool {
        matches!(self, Self::Previewed(_) | Self::Dropped(Some(_)))
    }
}
