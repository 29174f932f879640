//! Delete Confirm Button Component
//!
//! Row deletion is irreversible, so it takes a second click on "Так".

use leptos::prelude::*;

/// Two-step delete for one ledger row
///
/// `work` is the row description; it names the row in the tooltip and in
/// the aria labels of both states.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] work: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let label = delete_label(&work);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" role="group" aria-label=label.clone()>
                    <span class="delete-confirm-text">"Видалити?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Так"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >
                        "Ні"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title=label.clone()
                    aria-label=label.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}

/// Accessible name of the delete control; blank descriptions fall back to "рядок"
fn delete_label(work: &str) -> String {
    match work.trim() {
        "" => "Видалити рядок".to_string(),
        work => format!("Видалити «{}»", work),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_label_names_the_row() {
        assert_eq!(delete_label("Укладання плитки"), "Видалити «Укладання плитки»");
        assert_eq!(delete_label("   "), "Видалити рядок");
    }
}
