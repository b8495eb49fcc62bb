//! Home page: IP lookup, map, and search history.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount it loads the configured user's history and looks up the caller's
//! own public IP, prefilling the search box with it. Every backend call goes
//! through `store::ops`, so a missing token is refreshed before the request.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use store::geo::GeoState;
use store::ops;
use store::selection::HistorySelection;
use store::session::RequestStatus;
use store::types::{GeoRecord, HistoryEntry};

use crate::components::details_modal::DetailsModal;
use crate::components::geo_details::GeoDetails;
use crate::components::history_list::HistoryList;
use crate::components::map_view::MapView;
use crate::net::api::BrowserApi;
use crate::state::store::AppStore;
use crate::util::auth::LOGIN_ROUTE;

/// What the lookup panel should show for the current geo slice.
#[derive(Clone, Debug, PartialEq)]
enum LookupView {
    Idle,
    Loading,
    Found(GeoRecord),
    Failed(String),
}

fn lookup_view(geo: &GeoState) -> LookupView {
    match geo.status {
        RequestStatus::Idle => LookupView::Idle,
        RequestStatus::Loading => LookupView::Loading,
        RequestStatus::Succeeded => match &geo.current {
            Some(lookup) => LookupView::Found(lookup.geo_info.clone()),
            None => LookupView::Idle,
        },
        RequestStatus::Failed => LookupView::Failed(geo.error.clone().unwrap_or_default()),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let api = expect_context::<BrowserApi>();
    let navigate = use_navigate();
    let user_id = api.config().history_user_id;

    let ip = RwSignal::new(String::new());
    let selection = RwSignal::new(HistorySelection::default());
    let details = RwSignal::new(None::<HistoryEntry>);

    let mount_api = api.clone();
    leptos::task::spawn_local(async move {
        let _ = ops::fetch_history(&mount_api, &store, user_id).await;
    });
    let own_ip_api = api.clone();
    leptos::task::spawn_local(async move {
        if let Some(own_ip) = ops::discover_public_ip(&own_ip_api).await {
            ip.set(own_ip.clone());
            let _ = ops::fetch_geo_info(&own_ip_api, &store, &own_ip).await;
        }
    });

    let entries = Signal::derive(move || store.with(|s| s.geo.history.clone()));
    Effect::new(move || {
        let history = entries.get();
        selection.update(|s| s.retain_existing(&history));
    });

    let on_logout = move |_| {
        ops::logout(&store);
        selection.update(HistorySelection::clear);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let search_api = api.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = ip.get().trim().to_owned();
        if target.is_empty() {
            return;
        }
        let api = search_api.clone();
        leptos::task::spawn_local(async move {
            let _ = ops::fetch_geo_info(&api, &store, &target).await;
        });
    };

    let delete_api = api.clone();
    let on_delete = Callback::new(move |()| {
        let ids = selection.get_untracked().ids();
        if ids.is_empty() {
            return;
        }
        let api = delete_api.clone();
        leptos::task::spawn_local(async move {
            // Failures are logged by the operation and leave the list as is.
            if ops::delete_history(&api, &store, &ids, user_id).await.is_ok() {
                selection.update(HistorySelection::clear);
            }
        });
    });

    let on_show = Callback::new(move |entry: HistoryEntry| details.set(Some(entry)));
    let on_close = Callback::new(move |()| details.set(None));

    let panel = move || store.with(|s| lookup_view(&s.geo));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h2>"Home"</h2>
                <button class="btn home-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <form class="home-page__search" on:submit=on_search>
                <input
                    class="home-page__ip-input"
                    type="text"
                    placeholder="Enter IP Address"
                    prop:value=move || ip.get()
                    on:input=move |ev| ip.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>

            {move || match panel() {
                LookupView::Idle => ().into_any(),
                LookupView::Loading => view! { <p class="home-page__loading">"Loading..."</p> }.into_any(),
                LookupView::Found(record) => {
                    view! {
                        <div class="home-page__result">
                            <GeoDetails record=record.clone()/>
                            <MapView record=record/>
                        </div>
                    }
                        .into_any()
                }
                LookupView::Failed(message) => view! { <p class="home-page__error">{message}</p> }.into_any(),
            }}

            <HistoryList entries=entries selection=selection on_show=on_show on_delete=on_delete/>

            {move || {
                details
                    .get()
                    .map(|entry| view! { <DetailsModal entry=entry on_close=on_close/> })
            }}
        </div>
    }
}
