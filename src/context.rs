//! Application Context
//!
//! The ledger, the UI store and the derived view, provided via Leptos Context API.

use leptos::prelude::*;

use bud_ledger_core::{Ledger, LedgerConfig, LedgerResult, LedgerView, ViewFilter};

use crate::commands::{self, BrowserStorage};
use crate::store::{UiStateStoreFields, UiStore};

pub type AppLedger = Ledger<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct LedgerContext {
    /// The ledger itself; every mutation goes through [`LedgerContext::mutate`]
    ledger: RwSignal<AppLedger>,
    /// Session-only UI state
    pub ui: UiStore,
    /// Current projection of ledger + filters
    pub view: Memo<LedgerView>,
}

impl LedgerContext {
    pub fn new(ledger: AppLedger, ui: UiStore) -> Self {
        let ledger = RwSignal::new(ledger);
        let view = Memo::new(move |_| {
            let filter = ViewFilter::new(ui.search().get(), ui.category().get());
            ledger.with(|l| l.render(&filter))
        });
        Self { ledger, ui, view }
    }

    /// Run a ledger operation, then re-render.
    ///
    /// Failures are logged and shown to the user; `None` means it failed.
    pub fn mutate<T>(&self, op: impl FnOnce(&mut AppLedger) -> LedgerResult<T>) -> Option<T> {
        let mut outcome = None;
        self.ledger.update(|ledger| outcome = Some(op(ledger)));
        match outcome? {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Ledger operation failed: {}", e);
                commands::alert(&commands::user_message(&e));
                None
            }
        }
    }

    /// Read the ledger without subscribing
    pub fn read<T>(&self, f: impl FnOnce(&AppLedger) -> T) -> T {
        self.ledger.with_untracked(f)
    }

    /// Reactive dark-mode flag
    pub fn is_dark_mode(&self) -> bool {
        self.ledger.with(|l| l.state().is_dark_mode)
    }

    pub fn config(&self) -> LedgerConfig {
        self.read(|l| l.config().clone())
    }
}

/// Get the ledger context
pub fn use_ledger() -> LedgerContext {
    expect_context::<LedgerContext>()
}
