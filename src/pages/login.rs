//! Login page with username + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::LoginRequest;
use crate::routes::AppRoute;
use crate::state::session::SessionContext;

const MISSING_FIELDS: &str = "Enter both username and password.";
const LOGIN_FAILED: &str = "Login failed. Check your username and password.";

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api.login(&LoginRequest::new(&user_value, &password_value)).await;
            let accepted = session
                .try_update(|store| store.apply_login(&user_value, outcome))
                .unwrap_or(false);
            busy.set(false);
            if accepted {
                password.set(String::new());
                info.set(String::new());
                navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
            } else {
                info.set(LOGIN_FAILED.to_owned());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Squadboard"</h1>
                <p class="login-card__subtitle">"Team management"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
