use super::timetable::{collect_layouts, location_name, placements};
use super::{parse_date, reference_time};
use crate::{
    db::{db::Db, snapshots::Snapshots},
    libs::{
        attendance::{attendance_stats, squad_attendance},
        config::Config,
        distance::distance_stats,
        export::{ExportData, ExportFormat, ExportPayload, Exporter},
        messages::Message,
        session::{LocationId, SquadId, SwimmerId},
        snapshot::Snapshot,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, default_value = "today")]
    date: String,

    /// Swimmer for `stats`
    #[arg(long)]
    swimmer: Option<SwimmerId>,

    /// Squad for `squad`
    #[arg(long)]
    squad: Option<SquadId>,

    /// Location for `timetable`; every location otherwise
    #[arg(long)]
    location: Option<LocationId>,

    /// Export the whole week of `timetable`
    #[arg(long, requires = "location")]
    week: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let config = Config::read()?;
    let mut db = Db::new()?;
    let snapshot = load_for_export(&args, &Snapshots::new(&mut db.conn))?;
    let payload = build_payload(&args, &config, &snapshot)?;

    let exporter = Exporter::new(args.format, args.output.clone());
    let path = exporter.export(&payload)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}

/// Only the records the chosen export reads. A missing id leaves the
/// snapshot empty so `build_payload` reports it.
fn load_for_export(args: &ExportArgs, snapshots: &Snapshots<'_>) -> Result<Snapshot> {
    let snapshot = match args.data {
        ExportData::Stats => match args.swimmer {
            Some(swimmer_id) => snapshots.load_swimmer(swimmer_id)?.unwrap_or_default(),
            None => Snapshot::default(),
        },
        ExportData::Squad => match args.squad {
            Some(squad_id) => snapshots.load_squad(squad_id)?,
            None => Snapshot::default(),
        },
        ExportData::Timetable => snapshots.load_timetable(args.location, args.week, parse_date(&args.date)?)?,
    };
    Ok(snapshot)
}

fn build_payload(args: &ExportArgs, config: &Config, snapshot: &Snapshot) -> Result<ExportPayload> {
    let payload = match args.data {
        ExportData::Stats => {
            let swimmer_id = args.swimmer.ok_or_else(|| msg_error_anyhow!(Message::ExportNeedsSwimmer))?;
            let Some(swimmer) = snapshot.swimmer(swimmer_id) else {
                msg_bail_anyhow!(Message::SwimmerNotFound(swimmer_id));
            };
            let now = reference_time(&args.date)?;
            ExportPayload::Stats {
                swimmer: swimmer.display_name(),
                attendance: attendance_stats(
                    swimmer_id,
                    &snapshot.sessions,
                    &snapshot.attendance,
                    now,
                    &config.analytics_options(),
                ),
                distance: distance_stats(swimmer_id, &snapshot.sessions, &snapshot.attendance, now),
            }
        }
        ExportData::Squad => {
            let squad_id = args.squad.ok_or_else(|| msg_error_anyhow!(Message::ExportNeedsSquad))?;
            let Some(squad) = snapshot.squad(squad_id) else {
                msg_bail_anyhow!(Message::SquadNotFound(squad_id));
            };
            let now = reference_time(&args.date)?;
            ExportPayload::Squad {
                squad: squad.name.clone(),
                summaries: squad_attendance(
                    squad_id,
                    &snapshot.swimmers,
                    &snapshot.sessions,
                    &snapshot.attendance,
                    now,
                    &config.analytics_options(),
                ),
            }
        }
        ExportData::Timetable => {
            let date = parse_date(&args.date)?;
            let layouts = collect_layouts(snapshot, args.location, args.week, date, &config.layout_options()?)?;
            ExportPayload::Timetable {
                location: match args.location {
                    Some(id) => location_name(snapshot, id),
                    None => "All locations".to_string(),
                },
                placements: layouts.iter().flat_map(|layout| placements(snapshot, layout)).collect(),
            }
        }
    };

    Ok(payload)
}
