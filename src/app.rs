//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    WildcardSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::net::api::HttpSessionTransport;
use crate::pages::not_found::NotFoundPage;
use crate::routes::{Admission, app_routes, guard};
use crate::session::{SessionConfig, SessionManager};
use crate::state::auth::AuthState;

/// Session handle provided to every component.
pub type AppSession = SessionManager<HttpSessionTransport>;

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
/// Provides the session handle and its reactive mirror, validates the
/// session once in the browser, and routes every location through the
/// route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: AppSession = SessionManager::browser(SessionConfig::default());
    let auth = RwSignal::new(AuthState::default());

    provide_context(session.clone());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        auth.set(AuthState::snapshot(&session).begin_loading());
        leptos::task::spawn_local(async move {
            let outcome = session.validate_session().await;
            log::debug!("session validation finished: {outcome:?}");
            auth.set(AuthState::snapshot(&session));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/thumbnails-ui.css"/>
        <Title text="Level Thumbnails"/>

        <Router>
            <Routes fallback=|| view! { <RoutedPage/> }>
                <Route path=WildcardSegment("any") view=RoutedPage/>
            </Routes>
        </Router>
    }
}

/// Resolves the current location against the route table and applies the
/// auth guard before building the page.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let path = location.pathname.get();
        // Session changes (validation, logout) re-run the guard.
        auth.track();

        let Some(matched) = app_routes().resolve(&path) else {
            return view! { <NotFoundPage/> }.into_any();
        };
        match guard(matched.entry, || session.is_authenticated()) {
            Admission::Proceed => (matched.entry.view)(),
            Admission::Redirect(target) => {
                log::debug!("{path} requires a session; redirecting to {target}");
                view! { <Redirect path=target/> }.into_any()
            }
        }
    }
}
