//! UI State Store
//!
//! Session-only state (filters, edit mode, open dialogs). Uses Leptos
//! reactive_stores for fine-grained reactivity. Nothing here is persisted.

use reactive_stores::Store;

/// Transient UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Search box text
    pub search: String,
    /// Selected category filter ("" = all)
    pub category: String,
    /// Rows editable, add/delete/import visible
    pub edit_mode: bool,
    /// Import dialog visible
    pub import_open: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;
