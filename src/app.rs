//! Bud Ledger App
//!
//! Main application component: toolbar, totals and the three work tables.

use leptos::prelude::*;
use reactive_stores::Store;

use bud_ledger_core::{Ledger, LedgerConfig, Partition};

use crate::commands::BrowserStorage;
use crate::components::{DoneTable, ImportModal, PendingTable, Toolbar, TotalsPanel};
use crate::context::LedgerContext;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage::open();
    let persistent = storage.is_persistent();
    let ledger = Ledger::open(storage, LedgerConfig::default());
    log::info!(
        target: "APP",
        "Ledger opened: {} rows, persistent={}",
        ledger.state().len(),
        persistent
    );

    let ui = Store::new(UiState::default());
    let ctx = LedgerContext::new(ledger, ui);

    // Provide context to all children
    provide_context(ctx);

    // Keep the category filter valid: drop it once its category disappears
    Effect::new(move |_| {
        let kept = ctx.view.with(|v| v.category_filter.clone());
        if ui.category().get_untracked() != kept {
            ui.category().set(kept);
        }
    });

    // Theme lives on <body>
    Effect::new(move |_| {
        let class = if ctx.is_dark_mode() { "dark" } else { "" };
        if let Some(body) = document().body() {
            body.set_class_name(class);
        }
    });

    view! {
        <div class="app-layout">
            <Toolbar />
            <TotalsPanel />

            <main class="main-content">
                <DoneTable />
                <PendingTable partition=Partition::Repair title="Ремонт" />
                <PendingTable partition=Partition::Build title="Будівництво" />
            </main>

            <ImportModal />
        </div>
    }
}
