use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    #[arg(short, long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.defaults {
        Config::default().save()?;
    } else {
        Config::init()?.save()?;
    }

    msg_success!(Message::ConfigSaved);
    Ok(())
}
