//! Full-screen blocking overlay shown while any busy section is open.

use leptos::prelude::*;

use crate::state::ui::UiStore;

#[component]
pub fn BusyOverlay(ui: UiStore) -> impl IntoView {
    view! {
        <Show when=move || ui.is_busy()>
            <div class="busy-overlay" aria-busy="true">
                <div class="busy-overlay__spinner"></div>
            </div>
        </Show>
    }
}
