//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{login::LoginPage, not_found::NotFoundPage, section::SectionPage};
use crate::routes::{self, AppRoute, Navigation};
use crate::state::session::{SessionContext, SessionStore};
use crate::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides an unloaded session store and the auth API client as context,
/// and mounts one guarded route per table entry. The stored user is loaded
/// in the browser once hydration has finished, so the server render and the
/// first client render agree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SessionContext = RwSignal::new(SessionStore::new(BrowserStorage));
    provide_context(session);
    provide_context(HttpAuthApi::new(&ClientConfig::from_build_env()));

    Effect::new(move || session.update(SessionStore::load_user));

    view! {
        <Stylesheet id="leptos" href="/pkg/squadboard.css"/>
        <Title text="Squadboard"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=RouteFallback>
                    <Route path=StaticSegment("") view=|| view! { <Guarded route=AppRoute::Root/> }/>
                    <Route path=StaticSegment("login") view=|| view! { <Guarded route=AppRoute::Login/> }/>
                    <Route path=StaticSegment("dashboard") view=|| view! { <Guarded route=AppRoute::Dashboard/> }/>
                    <Route path=StaticSegment("teams") view=|| view! { <Guarded route=AppRoute::Teams/> }/>
                    <Route path=StaticSegment("players") view=|| view! { <Guarded route=AppRoute::Players/> }/>
                    <Route
                        path=StaticSegment("competitions")
                        view=|| view! { <Guarded route=AppRoute::Competitions/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Runs the route guard reactively and renders the page, a redirect, or a
/// placeholder while the session loads.
#[component]
fn Guarded(route: AppRoute) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    move || {
        let status = session.with(SessionStore::status);
        render_navigation(route.path(), routes::guard(route, status))
    }
}

/// Router fallback for paths outside the route table.
#[component]
fn RouteFallback() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let status = session.with(SessionStore::status);
        render_navigation(&path, routes::navigate(&path, status))
    }
}

fn render_navigation(requested: &str, navigation: Navigation) -> AnyView {
    match navigation {
        Navigation::Proceed(target) => load_view(target),
        Navigation::Redirect(target) => {
            leptos::logging::log!("redirect {requested} -> {}", target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
        Navigation::Pending => view! { <p class="session-loading">"Loading session..."</p> }.into_any(),
        Navigation::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Deferred view factory; a page is only built once its route is admitted.
fn load_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Root | AppRoute::Dashboard => view! { <SectionPage route=AppRoute::Dashboard/> }.into_any(),
        AppRoute::Teams | AppRoute::Players | AppRoute::Competitions => view! { <SectionPage route/> }.into_any(),
    }
}
