// Bookmark list state managers
// Managers own the in-memory list rows and the bulk selection over them.

pub mod list_content;
pub mod list_state;
mod selection_range;
pub mod selection_manager;
