//! Menu source boundary.
//!
//! The menu is reloaded from its source on every request so that each table
//! gets a fresh list; nothing is cached between calls.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileMenuRepository;
pub use in_memory::InMemoryMenuRepository;
pub use r#trait::MenuRepository;
