//! Shared sign-in helpers for chrome and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in is mocked until the inventory API exists: pages sign in with a
//! fixed demo identity. Keeping it here gives every entry point the same user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Identity;

/// The identity used by the mock sign-in buttons.
pub fn demo_identity() -> Identity {
    Identity {
        id: "demo-household-1".to_owned(),
        email: "demo@pantry.local".to_owned(),
        name: "Demo Household".to_owned(),
    }
}

/// Nav bar label: display name, falling back to the email, or a sign-in hint.
pub fn nav_label(identity: Option<&Identity>) -> String {
    match identity {
        Some(user) if !user.name.trim().is_empty() => user.name.clone(),
        Some(user) => user.email.clone(),
        None => "Not signed in".to_owned(),
    }
}
