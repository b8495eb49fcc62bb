//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use store::ApiConfig;

use crate::net::api::BrowserApi;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::store::AppStore;

/// Root application component.
///
/// Provides the shared store and HTTP client and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::debug!("api base url: {}", config.base_url);

    provide_context(AppStore::new());
    provide_context(BrowserApi::new(config));

    view! {
        <Title text="Geolens"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}
