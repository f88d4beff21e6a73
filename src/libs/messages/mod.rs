//! User-facing messages.
//!
//! All console text lives in the [`Message`] enum (`types`) and its
//! `Display` implementation (`display`); the `msg_*` macros in `macros`
//! decide where it is written.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
