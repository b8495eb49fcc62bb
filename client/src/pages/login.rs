//! Login page: email + password against `POST /login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use store::ops;
use store::session::RequestStatus;
use store::types::Credentials;

use crate::net::api::BrowserApi;
use crate::state::store::AppStore;
use crate::util::auth::install_home_redirect;

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials::new(email, password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let api = expect_context::<BrowserApi>();
    install_home_redirect(store, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let busy = move || store.with(|s| s.session.status.is_loading());
    let login_error = move || {
        store.with(|s| (s.session.status == RequestStatus::Failed).then(|| s.session.error.clone().unwrap_or_default()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            // Rejections are already in the session slice and rendered below.
            let _ = ops::login(&api, &store, &credentials).await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login Page"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        <span>"Email:"</span>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        <span>"Password:"</span>
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || login_error().is_some()>
                    <p class="login-message login-message--error">{move || login_error().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
