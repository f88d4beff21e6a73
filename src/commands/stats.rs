use super::reference_time;
use crate::{
    db::{db::Db, snapshots::Snapshots},
    libs::{
        attendance::attendance_stats,
        config::Config,
        distance::distance_stats,
        messages::Message,
        session::SwimmerId,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    swimmer_id: SwimmerId,

    /// Reference date for the week, month and trend windows
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let now = reference_time(&args.date)?;
    let options = Config::read()?.analytics_options();
    let mut db = Db::new()?;

    let Some(snapshot) = Snapshots::new(&mut db.conn).load_swimmer(args.swimmer_id)? else {
        msg_bail_anyhow!(Message::SwimmerNotFound(args.swimmer_id));
    };
    let swimmer = &snapshot.swimmers[0];
    let name = swimmer.display_name();

    let stats = attendance_stats(swimmer.id, &snapshot.sessions, &snapshot.attendance, now, &options);
    let distance = distance_stats(swimmer.id, &snapshot.sessions, &snapshot.attendance, now);

    msg_print!(Message::StatsHeader(name.clone(), now.date().to_string()), true);
    if stats.total == 0 {
        msg_info!(Message::NoAttendanceRecords(name));
        return Ok(());
    }

    msg_print!(Message::AttendanceSection);
    View::attendance(&stats)?;
    msg_print!(Message::PunctualitySection);
    View::punctuality(&stats)?;
    msg_print!(Message::WeekdaySection);
    View::weekdays(&stats)?;
    msg_print!(Message::TrendSection);
    View::trend(&stats)?;
    msg_print!(Message::DistanceSection);
    View::distance(&distance)
}
