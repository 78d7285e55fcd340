//! User-facing messages.
//!
//! All text printed by pwlab lives in the [`Message`] enum and its `Display`
//! impl, and is routed to the terminal or to `tracing` by the macros in
//! [`macros`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
