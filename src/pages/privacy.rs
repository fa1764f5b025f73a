//! Privacy policy page.

use leptos::prelude::*;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="doc-page">
            <h1>"Privacy Policy"</h1>
            <p>
                "We store your account id, username and role to attribute uploads. "
                "Session cookies are used only to keep you signed in."
            </p>
            <a href="/">"Back"</a>
        </div>
    }
}
