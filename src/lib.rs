//! # Poolside
//!
//! Timetable layout and swimmer analytics for a swimming club.
//!
//! - [`libs::layout`] places a day's sessions on an hour grid without
//!   overlapping rectangles
//! - [`libs::attendance`] and [`libs::distance`] aggregate per-swimmer
//!   attendance, punctuality and kilometres over calendar windows
//! - [`libs::search`] matches sessions against free text with highlights
//!
//! The analytics core is pure: it reads a [`libs::snapshot::Snapshot`] and a
//! reference time. [`db`] persists snapshots in SQLite and [`commands`] is
//! the CLI on top.
//!
//! ```rust,no_run
//! use poolside::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
