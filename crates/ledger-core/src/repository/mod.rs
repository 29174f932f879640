//! Repository Layer
//!
//! Storage abstractions and implementations.

mod traits;
mod memory;
#[cfg(feature = "sqlite")]
mod db;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use db::SqliteStore;
