use super::load_snapshot;
use crate::{
    libs::{config::Config, messages::Message, search::search_sessions_with, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Words to look for; an empty query lists every session
    query: Vec<String>,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let query = args.query.join(" ");
    let options = Config::read()?.search_options();
    let snapshot = load_snapshot()?;

    let hits = search_sessions_with(
        &snapshot.sessions,
        &snapshot.squads,
        &snapshot.coaches,
        &snapshot.locations,
        &query,
        &options,
    );

    if hits.is_empty() {
        msg_info!(Message::NoSearchResults(query));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(query, hits.len()), true);
    View::search(&hits)
}
