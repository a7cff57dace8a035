//! Item commands

mod add;
mod delete;
mod rename;

pub use add::AddItem;
pub use delete::DeleteItem;
pub use rename::RenameItem;
