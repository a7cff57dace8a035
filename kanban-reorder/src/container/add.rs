//! AddContainer command

use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::intent::{require_title, Applied, Mutation};
use crate::types::{Board, Container};
use serde::{Deserialize, Serialize};

/// Append a new, empty container to the right end of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddContainer {
    /// The container display title
    pub title: String,
}

impl AddContainer {
    /// Create a new AddContainer command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Mutation for AddContainer {
    fn op_string(&self) -> String {
        "add container".into()
    }

    fn apply(&self, board: &Board, ids: &dyn IdGenerator) -> Result<Applied> {
        require_title(&self.title)?;

        let container = Container::new(ids.container_id(), self.title.clone());
        let id = container.id.clone();
        let mut next = board.clone();
        next.containers.push(container);
        Ok(Applied::created(next, id))
    }
}
