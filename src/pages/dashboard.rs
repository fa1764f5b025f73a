//! Dashboard for signed-in users.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::state::auth::AuthState;

/// Shows the cached identity and a logout button.
/// Only reachable through the auth guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();

    let on_logout = move |_| {
        session.logout();
        auth.set(AuthState::snapshot(&session));
    };

    let username = move || {
        auth.get()
            .user
            .map_or_else(|| "unknown user".to_owned(), |user| user.username)
    };
    let role = move || auth.get().role.map_or("none", |role| role.as_str());
    let can_moderate = move || auth.get().role.is_some_and(|role| role.can_moderate());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>
            <Show when=move || auth.get().loading>
                <p>"Checking session..."</p>
            </Show>
            <p>"Signed in as " <strong>{username}</strong> " (" {role} ")"</p>
            <Show when=can_moderate>
                <p class="dashboard-page__notice">"You can review pending uploads."</p>
            </Show>
        </div>
    }
}
