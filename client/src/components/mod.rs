//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! App chrome that renders the shared stores. Components receive the stores
//! they read as props from the root component.

pub mod busy_overlay;
pub mod nav_bar;
pub mod toast_stack;
