//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Level Thumbnails"</h1>
            <p>"Community-made thumbnails for Geometry Dash levels."</p>
            <Show
                when=move || auth.get().role.is_some()
                fallback=|| view! { <p class="home-page__hint">"Not signed in."</p> }
            >
                <a href="/dashboard" class="btn btn--primary">"Go to dashboard"</a>
            </Show>
            <footer class="home-page__footer">
                <a href="/privacy">"Privacy"</a>
                <a href="/terms">"Terms"</a>
            </footer>
        </div>
    }
}
