use crate::{
    db::{db::Db, snapshots::Snapshots},
    libs::{messages::Message, snapshot::Snapshot},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snapshot JSON file
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    msg_info!(Message::ImportingSnapshot(args.file.display().to_string()));
    let mut snapshot = Snapshot::from_json_file(&args.file)?;

    if snapshot == Snapshot::default() {
        msg_warning!(Message::SnapshotEmpty);
        return Ok(());
    }

    let filled = snapshot.fill_missing_totals();
    if filled > 0 {
        msg_info!(Message::DistanceTotalsFilled(filled));
    }

    // Stored as-is; layout rejects malformed times per day.
    for (session, error) in snapshot.invalid_sessions() {
        msg_warning!(Message::InvalidSessionTimes(session.id, error.to_string()));
    }

    let mut db = Db::new()?;
    let summary = Snapshots::new(&mut db.conn).import(&snapshot)?;

    msg_success!(Message::ImportCompleted {
        sessions: summary.sessions,
        attendance: summary.attendance,
        swimmers: summary.swimmers,
    });
    Ok(())
}
