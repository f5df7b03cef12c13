mod appliance;
mod clock;
mod receiver;
mod show;
mod validate;
mod watch;

use clap::{Parser, Subcommand};

pub use self::appliance::Appliance;
use crate::{
    cli::{show::ShowArgs, validate::ValidateArgs, watch::WatchArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the day's schedule once and print the current tariff.
    #[clap(name = "show")]
    Show(Box<ShowArgs>),

    /// Keep polling the schedule and report every update.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Check that the receiver command ID yields an HDO schedule.
    #[clap(name = "validate")]
    Validate(Box<ValidateArgs>),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Show(args) => args.run().await,
            Self::Watch(args) => args.run().await,
            Self::Validate(args) => args.run().await,
        }
    }
}
