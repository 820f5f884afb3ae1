//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn HomePage(session: SessionStore) -> impl IntoView {
    view! {
        <main class="home-page">
            <h1>"Pantry"</h1>
            <p class="home-page__lede">
                "Keep track of groceries and pantry staples for your household."
            </p>
            <a class="btn btn--primary" href="/dashboard">
                {move || if session.is_authenticated() { "Open dashboard" } else { "Get started" }}
            </a>
        </main>
    }
}
