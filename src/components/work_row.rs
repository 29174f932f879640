//! Work Row Component
//!
//! One ledger row: completion checkbox, description, price, quantity, sum.

use leptos::prelude::*;

use bud_ledger_core::{Field, WorkItem};

use crate::components::DeleteConfirmButton;
use crate::context::use_ledger;
use crate::store::UiStateStoreFields;

/// Key over every displayed field, so any edit re-creates the row
pub type RowKey = (u64, String, String, String, u64, u64, bool);

pub fn row_key(item: &WorkItem) -> RowKey {
    (
        item.id,
        item.work.clone(),
        item.category.clone(),
        item.unit.clone(),
        item.price.to_bits(),
        item.qty.to_bits(),
        item.done,
    )
}

/// A single table row
///
/// Description and price become inputs in edit mode, for pending rows only.
#[component]
pub fn WorkRow(item: WorkItem, #[prop(optional)] in_done_table: bool) -> impl IntoView {
    let ctx = use_ledger();

    let id = item.id;
    let source = item.source;
    let done = item.done;
    let editable = move || ctx.ui.edit_mode().get() && !in_done_table;
    let row_class = if done { "work-row done" } else { "work-row" };
    let sum = format!("{:.2}", item.line_total());
    let qty = item.qty.to_string();
    let unit = item.unit.clone();
    let delete_label = item.work.clone();

    let work_cell = {
        let work = item.work.clone();
        move || {
            if editable() {
                view! {
                    <input
                        class="cell-input"
                        type="text"
                        prop:value=work.clone()
                        on:change=move |ev| {
                            ctx.mutate(|l| l.update(id, Field::Work, &event_target_value(&ev)));
                        }
                    />
                }
                .into_any()
            } else {
                view! { <span class="work-text">{work.clone()}</span> }.into_any()
            }
        }
    };

    let price_cell = {
        let price = item.price.to_string();
        move || {
            if editable() {
                view! {
                    <input
                        class="cell-input price"
                        type="text"
                        inputmode="decimal"
                        prop:value=price.clone()
                        on:change=move |ev| {
                            ctx.mutate(|l| l.update(id, Field::Price, &event_target_value(&ev)));
                        }
                    />
                }
                .into_any()
            } else {
                view! { <span>{price.clone()}</span> }.into_any()
            }
        }
    };

    view! {
        <tr class=row_class data-id=id.to_string() data-source=source.as_str()>
            <td>
                <input
                    type="checkbox"
                    prop:checked=done
                    on:change=move |_| {
                        ctx.mutate(|l| l.toggle_done(id, source));
                    }
                />
            </td>
            <td>{work_cell}</td>
            <td>{price_cell}</td>
            <td class="qty-cell">
                <input
                    type="number"
                    min="0"
                    step="0.1"
                    prop:value=qty
                    on:change=move |ev| {
                        ctx.mutate(|l| l.update(id, Field::Qty, &event_target_value(&ev)));
                    }
                />
                <span class="unit">{unit}</span>
            </td>
            <td class="sum-cell">{sum}</td>
            <td class="col-del">
                <Show when=editable>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        work=delete_label.clone()
                        on_confirm=Callback::new(move |_: ()| {
                            ctx.mutate(|l| l.delete(id, source));
                        })
                    />
                </Show>
            </td>
        </tr>
    }
}
