//! Import Modal Component
//!
//! Bulk import from the bundled catalog (append or replace) and full
//! restore from a backup file.

use leptos::prelude::*;
use leptos::task::spawn_local;

use bud_ledger_core::catalog::{self, ImportMode};

use crate::commands;
use crate::context::use_ledger;
use crate::store::UiStateStoreFields;

#[component]
pub fn ImportModal() -> impl IntoView {
    let ctx = use_ledger();
    let ui = ctx.ui;
    let close = move || ui.import_open().set(false);

    let import_catalog = move |mode: ImportMode| {
        let entries = match catalog::seed_catalog() {
            Ok(entries) => entries,
            Err(e) => {
                log::error!(target: "IMPORT", "Bundled catalog is unreadable: {}", e);
                commands::alert(&commands::user_message(&e));
                return;
            }
        };

        let question = match mode {
            ImportMode::Append => format!("Додати {} позицій до вашого списку?", entries.len()),
            ImportMode::Replace => {
                "УВАГА: Всі ваші дані будуть видалені і замінені базою. Продовжити?".to_string()
            }
        };
        if !commands::confirm(&question) {
            return;
        }

        if let Some(summary) = ctx.mutate(|l| l.import_catalog(&entries, mode)) {
            log::info!(target: "IMPORT", "Catalog import: {} rows from id {}", summary.total(), summary.first_id);
            close();
            commands::alert("Імпорт завершено!");
        }
    };

    let on_file = move |ev: web_sys::Event| {
        let Some(file) = commands::take_selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match commands::read_file_text(file).await {
                Ok(text) => {
                    if ctx.mutate(|l| l.restore_from_json(&text)).is_some() {
                        close();
                        commands::alert("Дані відновлено!");
                    }
                }
                Err(e) => {
                    log::error!(target: "IMPORT", "{}", e);
                    commands::alert("Помилка читання JSON");
                }
            }
        });
    };

    view! {
        <Show when=move || ui.import_open().get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"Імпорт"</h3>
                    <button class="modal-btn" on:click=move |_| import_catalog(ImportMode::Append)>
                        "Додати базу робіт до списку"
                    </button>
                    <button class="modal-btn danger" on:click=move |_| import_catalog(ImportMode::Replace)>
                        "Замінити все базою робіт"
                    </button>
                    <label class="modal-btn file-btn">
                        "Відновити з файлу (.json)"
                        <input type="file" accept=".json,application/json" hidden=true on:change=on_file />
                    </label>
                    <button class="modal-btn secondary" on:click=move |_| close()>"Скасувати"</button>
                </div>
            </div>
        </Show>
    }
}
