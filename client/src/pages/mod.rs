//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the stores it needs as props and delegates chrome to
//! `components`.

pub mod dashboard;
pub mod demo;
pub mod home;
