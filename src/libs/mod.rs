//! Library modules.
//!
//! The analytics core (`interval`, `period`, `layout`, `attendance`,
//! `distance`, `highlight`, `search`) works on the records in `session` and
//! `status` and does no I/O. The rest is the application around it:
//! configuration, storage paths, console output and export.

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod distance;
pub mod export;
pub mod formatter;
pub mod highlight;
pub mod interval;
pub mod layout;
pub mod messages;
pub mod period;
pub mod search;
pub mod session;
pub mod snapshot;
pub mod status;
pub mod view;
