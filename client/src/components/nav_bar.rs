//! Top navigation bar with route links and the mock sign-in control.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::state::ui::{Severity, UiStore};
use crate::util::auth::{demo_identity, nav_label};

/// App-wide navigation bar.
#[component]
pub fn NavBar(session: SessionStore, ui: UiStore) -> impl IntoView {
    let on_sign_in = move |_| {
        session.login(demo_identity());
        let _ = ui.show("Signed in", Severity::Success);
    };
    let on_sign_out = move |_| {
        session.logout();
        let _ = ui.info("Signed out");
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Pantry"</a>
            <a class="nav-bar__link" href="/dashboard">"Dashboard"</a>
            <a class="nav-bar__link" href="/test">"Test"</a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{move || nav_label(session.current_identity().as_ref())}</span>
            <Show
                when=move || session.is_authenticated()
                fallback=move || {
                    view! {
                        <button class="btn nav-bar__sign-in" on:click=on_sign_in>
                            "Sign in"
                        </button>
                    }
                }
            >
                <button class="btn nav-bar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
