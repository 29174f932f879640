//! UI Components
//!
//! Leptos components rendering the ledger view.

mod delete_confirm_button;
mod work_row;
mod work_table;
mod toolbar;
mod totals_panel;
mod import_modal;

pub use delete_confirm_button::DeleteConfirmButton;
pub use work_table::{DoneTable, PendingTable};
pub use toolbar::Toolbar;
pub use totals_panel::TotalsPanel;
pub use import_modal::ImportModal;
