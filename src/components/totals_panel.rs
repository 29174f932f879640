//! Totals Panel Component

use leptos::prelude::*;

use crate::context::use_ledger;

/// Done sum, planned sum and done count
#[component]
pub fn TotalsPanel() -> impl IntoView {
    let ctx = use_ledger();
    let config = ctx.config();
    let plan_config = config.clone();

    let done_sum = move || ctx.view.with(|v| config.format_money(v.totals.done_sum));
    let plan_sum = move || ctx.view.with(|v| plan_config.format_money(v.totals.plan_sum));
    let done_count = move || ctx.view.with(|v| v.totals.done_count);

    view! {
        <div class="totals-panel">
            <div class="total-card done">
                <span class="total-label">"Виконано"</span>
                <span class="total-value">{done_sum}</span>
            </div>
            <div class="total-card plan">
                <span class="total-label">"Заплановано"</span>
                <span class="total-value">{plan_sum}</span>
            </div>
            <div class="total-card count">
                <span class="total-label">"Позицій виконано"</span>
                <span class="total-value">{done_count}</span>
            </div>
        </div>
    }
}
