//! Search history list with selection checkboxes.

use leptos::prelude::*;
use store::selection::HistorySelection;
use store::types::HistoryEntry;

/// History rows. Ticking a checkbox toggles the id in `selection`; clicking
/// the address opens its details through `on_show`.
#[component]
pub fn HistoryList(
    entries: Signal<Vec<HistoryEntry>>,
    selection: RwSignal<HistorySelection>,
    on_show: Callback<HistoryEntry>,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="history">
            <header class="history__header">
                <h3>"Search History"</h3>
                <button
                    class="btn btn--danger history__delete"
                    on:click=move |_| on_delete.run(())
                    disabled=move || selection.with(HistorySelection::is_empty)
                >
                    "Delete"
                </button>
            </header>
            <Show
                when=move || !entries.with(Vec::is_empty)
                fallback=|| view! { <p class="history__empty">"No searches yet."</p> }
            >
                <ul class="history__list">
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let id = entry.id;
                                let input_id = format!("history-{id}");
                                let label = entry.ip_address.clone();
                                view! {
                                    <li class="history__item">
                                        <input
                                            type="checkbox"
                                            id=input_id.clone()
                                            prop:checked=move || selection.with(|s| s.contains(id))
                                            on:change=move |_| {
                                                selection.update(|s| {
                                                    s.toggle(id);
                                                });
                                            }
                                        />
                                        <label
                                            for=input_id
                                            class="history__address"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                on_show.run(entry.clone());
                                            }
                                        >
                                            {label}
                                        </label>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
