//! Toolbar Component
//!
//! Mode and theme toggles, import/export actions, search and category filter.

use leptos::prelude::*;

use crate::commands::{self, CSV_MIME, JSON_MIME};
use crate::context::use_ledger;
use crate::store::UiStateStoreFields;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_ledger();
    let ui = ctx.ui;

    let toggle_edit = move |_| ui.edit_mode().update(|on| *on = !*on);

    let toggle_theme = move |_| {
        ctx.mutate(|l| l.toggle_theme());
    };

    let backup = move |_| {
        let today = chrono::Local::now().date_naive();
        match ctx.read(|l| l.backup(today)) {
            Ok((name, json)) => {
                if let Err(e) = commands::download_text(&name, &json, JSON_MIME) {
                    log::error!(target: "TOOLBAR", "Backup download failed: {}", e);
                }
            }
            Err(e) => commands::alert(&commands::user_message(&e)),
        }
    };

    let export_csv = move |_| {
        let file_name = ctx.config().report_file_name;
        match ctx.read(|l| l.report()) {
            Ok(csv) => {
                if let Err(e) = commands::download_text(&file_name, &csv, CSV_MIME) {
                    log::error!(target: "TOOLBAR", "Report download failed: {}", e);
                }
            }
            Err(e) => commands::alert(&commands::user_message(&e)),
        }
    };

    let categories = move || ctx.view.with(|v| v.categories.clone());

    view! {
        <header class="toolbar">
            <div class="toolbar-actions">
                <button
                    class=move || if ui.edit_mode().get() { "tool-btn active" } else { "tool-btn" }
                    title="Режим редагування"
                    on:click=toggle_edit
                >
                    "✎"
                </button>
                <button class="tool-btn" title="Тема" on:click=toggle_theme>
                    {move || if ctx.is_dark_mode() { "☀" } else { "☾" }}
                </button>
                <Show when=move || ui.edit_mode().get()>
                    <button class="tool-btn" on:click=move |_| ui.import_open().set(true)>
                        "Імпорт"
                    </button>
                </Show>
                <button class="tool-btn" on:click=backup>"Бекап"</button>
                <button class="tool-btn" on:click=export_csv>"CSV"</button>
            </div>

            <div class="toolbar-filters">
                <input
                    type="search"
                    placeholder="Пошук..."
                    prop:value=move || ui.search().get()
                    on:input=move |ev| ui.search().set(event_target_value(&ev))
                />
                <select
                    prop:value=move || ui.category().get()
                    on:change=move |ev| ui.category().set(event_target_value(&ev))
                >
                    <option value="">"Всі розділи"</option>
                    <For
                        each=categories
                        key=|category| category.clone()
                        children=move |category: String| {
                            let value = category.clone();
                            let selected = move || ui.category().get() == value;
                            view! {
                                <option value=category.clone() selected=selected>
                                    {category.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
        </header>
    }
}
