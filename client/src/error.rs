//! Store error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! `Disposed` is a developer-facing configuration error: a store handle was
//! read after the app tore it down. Corrupt persisted data is recovered
//! locally by the session store and only surfaces here so it can be logged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A store handle was used outside its active lifetime.
    #[error("{0} store used outside its active lifetime")]
    Disposed(&'static str),
    /// `show` was called with a blank message.
    #[error("toast message must not be empty")]
    EmptyMessage,
    /// The durable session slot held text that is not a valid identity.
    #[error("persisted session is corrupt: {0}")]
    CorruptSession(#[from] serde_json::Error),
    /// The durable slot rejected a write.
    #[error("could not write slot {key}: {reason}")]
    SlotWrite { key: String, reason: String },
}
