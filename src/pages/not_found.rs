//! Fallback for paths outside the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found."</h1>
            <A href=AppRoute::Dashboard.path()>"Back to the dashboard"</A>
        </section>
    }
}
