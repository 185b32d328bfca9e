//! Placeholder screen for the authenticated dashboard sections.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::session::SessionContext;

#[component]
pub fn SectionPage(route: AppRoute) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let greeting = move || {
        session.with(|store| store.username().map(|name| format!("Signed in as {name}")).unwrap_or_default())
    };

    view! {
        <section class="section-page">
            <h1 class="section-page__title">{route.name()}</h1>
            <p class="section-page__user">{greeting}</p>
        </section>
    }
}
