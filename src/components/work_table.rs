//! Work Table Components
//!
//! The completed table (flat) and the per-partition pending tables
//! (grouped by category, collapsible).

use leptos::prelude::*;

use bud_ledger_core::{GroupView, Partition, WorkItem};

use crate::components::work_row::{row_key, WorkRow};
use crate::context::use_ledger;
use crate::store::UiStateStoreFields;

#[component]
fn TableHead() -> impl IntoView {
    view! {
        <thead>
            <tr>
                <th class="col-check">"✓"</th>
                <th>"Робота"</th>
                <th>"Ціна"</th>
                <th>"К-сть"</th>
                <th>"Сума"</th>
                <th class="col-del"></th>
            </tr>
        </thead>
    }
}

#[component]
fn EmptyRow(message: &'static str) -> impl IntoView {
    view! {
        <tr class="empty-row">
            <td colspan="6">{message}</td>
        </tr>
    }
}

/// Completed items of both partitions; search and category filters do not apply
#[component]
pub fn DoneTable() -> impl IntoView {
    let ctx = use_ledger();
    let rows = move || ctx.view.with(|v| v.done.clone());
    let is_empty = move || ctx.view.with(|v| v.done.is_empty());

    view! {
        <section class="ledger-section done-section">
            <div class="section-header">
                <h2>"Виконано"</h2>
            </div>
            <table class="work-table">
                <TableHead />
                <tbody>
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! { <EmptyRow message="Немає виконаних робіт" /> }
                    >
                        <For
                            each=rows
                            key=row_key
                            children=move |item: WorkItem| view! { <WorkRow item=item in_done_table=true /> }
                        />
                    </Show>
                </tbody>
            </table>
        </section>
    }
}

/// Pending items of one partition, grouped by category
#[component]
pub fn PendingTable(partition: Partition, title: &'static str) -> impl IntoView {
    let ctx = use_ledger();
    let categories = move || {
        ctx.view
            .with(|v| v.groups(partition).iter().map(|g| g.category.clone()).collect::<Vec<_>>())
    };
    let is_empty = move || ctx.view.with(|v| v.groups(partition).is_empty());

    view! {
        <section class="ledger-section">
            <div class="section-header">
                <h2>{title}</h2>
                <Show when=move || ctx.ui.edit_mode().get()>
                    <button
                        class="add-btn"
                        on:click=move |_| {
                            ctx.mutate(|l| l.add(partition));
                        }
                    >
                        "+ Додати"
                    </button>
                </Show>
            </div>
            <table class="work-table">
                <TableHead />
                <tbody>
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! { <EmptyRow message="Список порожній" /> }
                    >
                        <For
                            each=categories
                            key=|category| category.clone()
                            children=move |category: String| {
                                view! { <CategoryGroup partition=partition category=category /> }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </section>
    }
}

/// Group header plus its rows.
///
/// Reads its group from the view by category, so edits inside the group
/// re-render rows without rebuilding the header.
#[component]
fn CategoryGroup(partition: Partition, category: String) -> impl IntoView {
    let ctx = use_ledger();

    let group = {
        let category = category.clone();
        move || -> Option<GroupView> {
            ctx.view
                .with(|v| v.groups(partition).iter().find(|g| g.category == category).cloned())
        }
    };
    let group_for_header = group.clone();
    let header = move || {
        group_for_header()
            .map(|g| format!("{} {}", if g.collapsed { "▶" } else { "▼" }, g.category))
            .unwrap_or_default()
    };
    let group_for_count = group.clone();
    let count = move || group_for_count().map(|g| g.count()).unwrap_or(0);
    let rows = move || group().map(|g| g.visible_rows().to_vec()).unwrap_or_default();

    let on_header_click = move |_| {
        ctx.mutate(|l| l.toggle_group(&category));
    };

    view! {
        <tr class="group-header" on:click=on_header_click>
            <td colspan="6">
                {header}
                " "
                <span class="group-count">"(" {count} ")"</span>
            </td>
        </tr>
        <For
            each=rows
            key=row_key
            children=move |item: WorkItem| view! { <WorkRow item=item /> }
        />
    }
}
