//! Modal showing the stored lookup behind one history entry.

#[cfg(test)]
#[path = "details_modal_test.rs"]
mod details_modal_test;

use leptos::prelude::*;
use store::types::HistoryEntry;

use crate::components::geo_details::GeoDetails;

/// Whether a keydown with `key` dismisses the modal.
fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}

/// Closes on the X button, a backdrop click, or Escape.
///
/// The dialog takes focus on mount so Escape reaches it without a click.
#[component]
pub fn DetailsModal(entry: HistoryEntry, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if closes_dialog(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(dialog_el) = dialog_ref.get() {
                let _ = dialog_el.focus();
            }
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--details"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="-1"
            >
                <div class="dialog__header">
                    <h2>"IP Details"</h2>
                    <button class="btn dialog__close" on:click=on_close_click title="Close">
                        "X"
                    </button>
                </div>
                <GeoDetails record=entry.geo_info/>
            </div>
        </div>
    }
}
