//! Container commands

mod add;
mod delete;
mod rename;

pub use add::AddContainer;
pub use delete::DeleteContainer;
pub use rename::RenameContainer;
