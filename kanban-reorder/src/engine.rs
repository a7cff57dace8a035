//! BoardEngine - routes drag gestures and intents into the board store
//!
//! The engine is the single writer. Every change, whether a live drag step, a drop
//! or a direct intent, ends in [`BoardStore::apply_mutation`], after which observers
//! are notified and the board is handed to the persister.
//!
//! Drag handling follows one rule for every `Move` and `End`: resolve the source
//! and the target against the *current* board, plan with [`plan_move`], apply. A
//! session remembers the last target it applied so a repeated target (including the
//! drop that follows the final preview) does not replan on top of itself.

use crate::config::EngineConfig;
use crate::drag::{DragEvent, DragOutcome, DragSession, IgnoreReason};
use crate::error::Result;
use crate::hit::{resolve_entity, resolve_hit, Hit};
use crate::id_gen::{IdGenerator, UuidGenerator};
use crate::intent::Mutation;
use crate::persist::Persister;
use crate::planner::{plan_move, MoveKind, MovePlan, NoOpReason};
use crate::store::BoardStore;
use crate::types::{Board, EntityId, Item};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};

/// Receives the full board after every committed change
pub trait BoardObserver: Send {
    fn board_changed(&self, board: &Board, revision: u64);
}

impl<F> BoardObserver for F
where
    F: Fn(&Board, u64) + Send,
{
    fn board_changed(&self, board: &Board, revision: u64) {
        self(board, revision)
    }
}

/// What the drag overlay should show for the entity being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Item { title: String },
    Container { title: String, items: Vec<Item> },
}

/// Owns the board store and the current drag session
pub struct BoardEngine {
    store: BoardStore,
    session: Option<DragSession>,
    config: EngineConfig,
    ids: Arc<dyn IdGenerator>,
    observers: Vec<Box<dyn BoardObserver>>,
    persister: Option<Persister>,
}

impl BoardEngine {
    /// Create an engine around an initial board
    pub fn new(board: Board, config: EngineConfig) -> Result<Self> {
        Ok(Self {
            store: BoardStore::new(board)?,
            session: None,
            config,
            ids: Arc::new(UuidGenerator),
            observers: Vec::new(),
            persister: None,
        })
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Register a render observer
    pub fn with_observer(mut self, observer: impl BoardObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Attach a persister that receives every committed board
    pub fn with_persister(mut self, persister: Persister) -> Self {
        self.persister = Some(persister);
        self
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Detach the persister so the caller can flush it
    pub fn take_persister(&mut self) -> Option<Persister> {
        self.persister.take()
    }

    // =========================================================================
    // Drag handling
    // =========================================================================

    /// Handle one drag event using the wall clock
    pub fn handle_drag(&mut self, event: DragEvent) -> DragOutcome {
        self.handle_drag_at(event, Instant::now())
    }

    /// Handle one drag event as of `now`
    pub fn handle_drag_at(&mut self, event: DragEvent, now: Instant) -> DragOutcome {
        trace!(event = event.name(), "drag event");
        match event {
            DragEvent::Start { active } => self.start(&active, now),
            DragEvent::Move { over } => self.drag_move(over.as_deref(), now),
            DragEvent::End { over } => self.drag_end(over.as_deref(), now),
            DragEvent::Cancel => self.cancel(),
        }
    }

    fn start(&mut self, active: &str, now: Instant) -> DragOutcome {
        let Some(id) = EntityId::parse(active) else {
            warn!(id = active, "drag start on untagged id");
            self.session = None;
            return DragOutcome::Ignored(IgnoreReason::UntaggedActive);
        };
        if let Some(previous) = self.session.take() {
            warn!(
                previous = %previous.active(),
                next = %id,
                "drag start while a session was active; replacing it"
            );
        }
        debug!(active = %id, "drag started");
        self.session = Some(DragSession::new(id, now));
        DragOutcome::Started
    }

    fn drag_move(&mut self, over: Option<&str>, now: Instant) -> DragOutcome {
        if let Err(reason) = self.check_session("move", now) {
            return DragOutcome::Ignored(reason);
        }
        let dragging_container = self
            .session
            .as_ref()
            .is_some_and(|s| s.active().is_container());
        if dragging_container && !self.config.live_container_reorder {
            return DragOutcome::Deferred;
        }
        match self.step(over) {
            Step::Applied(kind) => DragOutcome::Previewed(kind),
            Step::Skipped => DragOutcome::AlreadyApplied,
            Step::NoOp(reason) => DragOutcome::Unchanged(reason),
            Step::Rejected => DragOutcome::Ignored(IgnoreReason::Rejected),
        }
    }

    fn drag_end(&mut self, over: Option<&str>, now: Instant) -> DragOutcome {
        if let Err(reason) = self.check_session("end", now) {
            return DragOutcome::Ignored(reason);
        }
        let outcome = match self.step(over) {
            Step::Applied(kind) => DragOutcome::Dropped(Some(kind)),
            Step::Skipped | Step::NoOp(_) => DragOutcome::Dropped(None),
            Step::Rejected => DragOutcome::Ignored(IgnoreReason::Rejected),
        };
        if let Some(session) = self.session.take() {
            debug!(active = %session.active(), "drag ended");
        }
        outcome
    }

    /// Clear the session without touching the board
    pub fn cancel(&mut self) -> DragOutcome {
        match self.session.take() {
            Some(session) => {
                debug!(active = %session.active(), "drag cancelled");
                DragOutcome::Cancelled
            }
            None => DragOutcome::Ignored(IgnoreReason::NoSession),
        }
    }

    /// Make sure a live session exists, dropping an expired one
    fn check_session(
        &mut self,
        event: &'static str,
        now: Instant,
    ) -> std::result::Result<(), IgnoreReason> {
        let expired = match &self.session {
            None => {
                warn!(event, "drag event without an active session; ignoring");
                return Err(IgnoreReason::NoSession);
            }
            Some(session) => session.is_expired(now, self.config.drag_timeout()),
        };
        if expired {
            if let Some(session) = self.session.take() {
                warn!(
                    event,
                    active = %session.active(),
                    timeout_ms = self.config.drag_timeout_ms,
                    "drag session expired"
                );
            }
            return Err(IgnoreReason::SessionExpired);
        }
        if let Some(session) = self.session.as_mut() {
            session.touch(now);
        }
        Ok(())
    }

    /// Resolve, plan and apply one step of the running session
    fn step(&mut self, over: Option<&str>) -> Step {
        let Some(session) = self.session.as_ref() else {
            return Step::Skipped;
        };

        let board = self.store.board();
        let target = resolve_hit(board, over);
        let target_id = target.entity_id();
        if session.already_applied(target_id.as_ref()) {
            trace!(over, "target already reflected on board");
            return Step::Skipped;
        }

        let source = resolve_entity(board, session.active());
        let plan = plan_move(board, &source, &target);
        let (kind, next) = match plan {
            MovePlan::NoOp(reason) => {
                trace!(?reason, "drag step is a no-op");
                return Step::NoOp(reason);
            }
            MovePlan::Apply { kind, board } => (kind, board),
        };

        if self.commit(next).is_err() {
            return Step::Rejected;
        }
        debug!(move_kind = %kind, active = %source_label(&source), "applied move");
        if let (Some(session), Some(target_id)) = (self.session.as_mut(), target_id) {
            session.record_applied(target_id);
        }
        Step::Applied(kind)
    }

    /// Overlay content for the entity being dragged
    pub fn active_preview(&self) -> Option<Preview> {
        let session = self.session.as_ref()?;
        let board = self.store.board();
        match session.active() {
            EntityId::Item(id) => board.find_item(id).map(|item| Preview::Item {
                title: item.title.clone(),
            }),
            EntityId::Container(id) => board.find_container(id).map(|c| Preview::Container {
                title: c.title.clone(),
                items: c.items.clone(),
            }),
        }
    }

    // =========================================================================
    // Direct intents
    // =========================================================================

    /// Apply a direct mutation, returning the id it created, if any
    pub fn apply_intent(&mut self, intent: &dyn Mutation) -> Result<Option<EntityId>> {
        let op = intent.op_string();
        let applied = intent.apply(self.store.board(), self.ids.as_ref())?;
        self.commit(applied.board)?;
        info!(op = %op, created = ?applied.created.as_ref().map(|id| id.as_str()), "applied intent");
        Ok(applied.created)
    }

    /// Replace the board, then notify observers and the persister
    fn commit(&mut self, board: Board) -> Result<u64> {
        let revision = match self.store.apply_mutation(board) {
            Ok(revision) => revision,
            Err(e) => {
                error!(error = %e, "board invariant violated; change discarded");
                return Err(e);
            }
        };
        let board = self.store.board();
        for observer in &self.observers {
            observer.board_changed(board, revision);
        }
        if let Some(persister) = &self.persister {
            persister.submit(revision, board.clone());
        }
        Ok(revision)
    }
}

enum Step {
    Applied(MoveKind),
    Skipped,
    NoOp(NoOpReason),
    Rejected,
}

fn source_label(hit: &Hit) -> String {
    hit.entity_id()
        .map(|id| id.to_string())
        .unwrap_or_default()
}
