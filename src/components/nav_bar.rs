//! Top navigation with section links and logout.
//!
//! Hidden while no user is signed in, so the login page renders bare. Logout
//! needs no explicit navigation: the guarded page re-evaluates against the
//! cleared session and redirects to `/login` itself.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::nav_sections;
use crate::state::session::SessionContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let on_logout = move |_| session.update(|store| store.logout());

    view! {
        <Show when=move || session.with(|store| store.is_authenticated())>
            <nav class="nav-bar">
                {nav_sections()
                    .map(|route| view! { <A href=route.path()>{route.name()}</A> })
                    .collect_view()}
                <span class="nav-bar__user">
                    {move || session.with(|store| store.username().unwrap_or_default().to_owned())}
                </span>
                <button class="nav-bar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
        </Show>
    }
}
