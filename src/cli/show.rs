use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;

use crate::{
    cli::{appliance::AppliancesArgs, receiver::ReceiverArgs},
    core::{
        parser::{self, parse_wall_time},
        period::Period,
        snapshot::build_snapshot,
    },
    prelude::*,
    tables::{build_periods_table, build_snapshot_table},
};

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    receiver: ReceiverArgs,

    /// Day to fetch as `DD.MM.YYYY`, defaults to today.
    #[clap(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Evaluate the schedule at `HH:MM` instead of now.
    #[clap(long, value_parser = parse_wall_time)]
    at: Option<NaiveTime>,

    /// Parse a saved HDO bar markup instead of fetching it.
    #[clap(long)]
    html_file: Option<PathBuf>,

    /// Print the snapshot as JSON.
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    appliances: AppliancesArgs,
}

impl ShowArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let now = self.receiver.clock.now();
        let date = self.date.unwrap_or_else(|| now.date());
        let time = self.at.unwrap_or_else(|| now.time());

        let periods = self.load_periods(date).await?;
        if periods.is_empty() {
            warn!(%date, "no HDO periods found");
        }

        let snapshot = build_snapshot(periods, time);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            println!("{}", build_periods_table(&snapshot.periods, snapshot.evaluated_at));
            println!("{}", build_snapshot_table(&snapshot, &self.appliances.appliances));
        }
        Ok(())
    }

    async fn load_periods(&self, date: NaiveDate) -> Result<Vec<Period>> {
        if let Some(path) = &self.html_file {
            info!(path = %path.display(), "reading…");
            let markup = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            return Ok(parser::parse(&markup)?);
        }
        self.receiver
            .new_client()?
            .get_periods(self.receiver.command_id(), Some(date))
            .await
            .with_context(|| format!("failed to get the HDO schedule for {date}"))
    }
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d.%m.%Y")
        .with_context(|| format!("expected `DD.MM.YYYY`, got `{text}`"))
}
