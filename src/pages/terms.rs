//! Terms of service page.

use leptos::prelude::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="doc-page">
            <h1>"Terms of Service"</h1>
            <p>"Uploads must be your own work and may be removed by moderators."</p>
            <a href="/">"Back"</a>
        </div>
    }
}
