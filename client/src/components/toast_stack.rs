//! Fixed-position stack of active toasts.
//!
//! Each toast renders with a severity modifier class and its own dismiss
//! control. Expiry is driven by the UI store, not by this component.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::ui::{Severity, UiStore};

/// Renders every active toast, oldest at the top.
#[component]
pub fn ToastStack(ui: UiStore) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                ui.active_notifications()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_class(toast.severity) data-toast-id=id.to_string()>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| ui.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

pub(crate) fn toast_class(severity: Severity) -> String {
    format!("toast toast--{}", severity.as_str())
}
