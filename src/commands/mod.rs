//! Browser Command Wrappers
//!
//! Thin bindings to the browser APIs the app needs, organized by concern.

mod storage;
mod dialog;
mod files;
mod download;

// Re-export all public items
pub use storage::*;
pub use dialog::*;
pub use files::*;
pub use download::*;
