//! Dashboard placeholder for the signed-in household.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inventory lists will live here once the backend API exists. Until then the
//! page greets the signed-in user and prompts signed-out visitors to sign in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::session::{Identity, SessionStore};
use crate::state::ui::{Severity, UiStore};
use crate::util::auth::demo_identity;

#[component]
pub fn DashboardPage(session: SessionStore, ui: UiStore) -> impl IntoView {
    let on_sign_in = move |_| {
        session.login(demo_identity());
        let _ = ui.show("Signed in", Severity::Success);
    };

    view! {
        <main class="dashboard-page">
            <Show
                when=move || session.is_authenticated()
                fallback=move || {
                    view! {
                        <section class="dashboard-page__signed-out">
                            <p>"Sign in to see your pantry."</p>
                            <button class="btn btn--primary" on:click=on_sign_in>
                                "Sign in"
                            </button>
                        </section>
                    }
                }
            >
                <h1>{move || greeting(session.current_identity().as_ref())}</h1>
                <p class="dashboard-page__empty">"No pantry items yet. Inventory tracking is on the way."</p>
            </Show>
        </main>
    }
}

pub(crate) fn greeting(identity: Option<&Identity>) -> String {
    match identity {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_owned(),
    }
}
