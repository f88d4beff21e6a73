use super::reference_time;
use crate::{
    db::{db::Db, snapshots::Snapshots},
    libs::{attendance::squad_attendance, config::Config, messages::Message, session::SquadId, view::View},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SquadArgs {
    squad_id: SquadId,

    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: SquadArgs) -> Result<()> {
    let now = reference_time(&args.date)?;
    let options = Config::read()?.analytics_options();
    let mut db = Db::new()?;
    let snapshot = Snapshots::new(&mut db.conn).load_squad(args.squad_id)?;

    let Some(squad) = snapshot.squad(args.squad_id) else {
        msg_bail_anyhow!(Message::SquadNotFound(args.squad_id));
    };

    let summaries = squad_attendance(
        squad.id,
        &snapshot.swimmers,
        &snapshot.sessions,
        &snapshot.attendance,
        now,
        &options,
    );
    if summaries.is_empty() {
        msg_info!(Message::NoSwimmersInSquad(squad.name.clone()));
        return Ok(());
    }

    msg_print!(Message::SquadHeader(squad.name.clone(), now.date().to_string()), true);
    View::squad(&summaries)
}
