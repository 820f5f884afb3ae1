//! Test page for exercising toasts, the busy overlay and the session store.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use leptos::prelude::*;

use crate::error::StoreError;
use crate::state::session::SessionStore;
use crate::state::ui::{Severity, UiStore};
use crate::util::auth::demo_identity;

/// How long the simulated load holds the busy overlay.
#[cfg(feature = "hydrate")]
const SIMULATED_LOAD_MS: u32 = 1_500;

#[component]
pub fn DemoPage(session: SessionStore, ui: UiStore) -> impl IntoView {
    let message = RwSignal::new(String::new());
    let severity = RwSignal::new(Severity::Info);

    let on_show = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match ui.show(&message.get(), severity.get()) {
            Ok(_) => message.set(String::new()),
            Err(StoreError::EmptyMessage) => {
                let _ = ui.show("Enter a message first.", Severity::Warning);
            }
            Err(e) => leptos::logging::warn!("toast failed: {e}"),
        }
    };

    let on_preset = move |level: Severity| {
        let _ = ui.show(preset_message(level), level);
    };

    let on_simulate_load = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let guard = ui.busy_guard();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SIMULATED_LOAD_MS).await;
                drop(guard);
                let _ = ui.show("Load finished", Severity::Success);
            });
        }
    };

    let on_toggle_session = move |_| {
        if session.is_authenticated() {
            session.logout();
            let _ = ui.info("Signed out");
        } else {
            session.login(demo_identity());
            let _ = ui.show("Signed in", Severity::Success);
        }
    };

    view! {
        <main class="demo-page">
            <h1>"Test"</h1>
            <section class="demo-page__presets">
                {[Severity::Success, Severity::Error, Severity::Warning, Severity::Info]
                    .into_iter()
                    .map(|level| {
                        view! {
                            <button
                                class=format!("btn demo-page__preset demo-page__preset--{}", level.as_str())
                                on:click=move |_| on_preset(level)
                            >
                                {level.as_str()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
            <form class="demo-page__form" on:submit=on_show>
                <input
                    class="demo-page__input"
                    type="text"
                    placeholder="Toast message"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <select
                    class="demo-page__select"
                    on:change=move |ev| severity.set(parse_severity(&event_target_value(&ev)))
                >
                    <option value="info" selected=true>"info"</option>
                    <option value="success">"success"</option>
                    <option value="warning">"warning"</option>
                    <option value="error">"error"</option>
                </select>
                <button class="btn btn--primary" type="submit">"Show toast"</button>
            </form>
            <section class="demo-page__actions">
                <button class="btn" on:click=on_simulate_load>"Simulate load"</button>
                <button class="btn" on:click=on_toggle_session>
                    {move || if session.is_authenticated() { "Sign out" } else { "Sign in" }}
                </button>
            </section>
        </main>
    }
}

/// Map a `<select>` value to a severity; unknown values fall back to info.
pub(crate) fn parse_severity(value: &str) -> Severity {
    match value {
        "success" => Severity::Success,
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Info,
    }
}

pub(crate) fn preset_message(level: Severity) -> &'static str {
    match level {
        Severity::Success => "Groceries saved.",
        Severity::Error => "Could not reach the pantry server.",
        Severity::Warning => "Milk expires tomorrow.",
        Severity::Info => "Shopping list synced.",
    }
}
