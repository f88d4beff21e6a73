//! SQLite persistence for the club's sessions and attendance.
//!
//! [`db::Db`] owns the connection and applies [`migrations`] on open. Each
//! table has a small repository borrowing that connection; [`snapshots`]
//! ties them together to load or import a whole [`crate::libs::snapshot::Snapshot`].
//!
//! ```rust,no_run
//! use poolside::db::{db::Db, snapshots::Snapshots};
//!
//! let mut db = Db::new()?;
//! let snapshot = Snapshots::new(&mut db.conn).load()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod attendance;
pub mod coaches;
pub mod db;
pub mod locations;
pub mod migrations;
pub mod sessions;
pub mod snapshots;
pub mod squads;
pub mod swimmers;
