//! Read-only consumers of the published snapshots.

use crate::{
    cli::Appliance,
    core::snapshot::Snapshot,
    prelude::*,
    tables::{build_periods_table, build_snapshot_table},
};

pub trait Observer: Send + 'static {
    fn name(&self) -> &'static str;

    fn on_snapshot(&self, snapshot: &Snapshot) -> Result;
}

/// Logs the headline values.
pub struct Summary;

impl Observer for Summary {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn on_snapshot(&self, snapshot: &Snapshot) -> Result {
        info!(
            current_tariff = ?snapshot.current_tariff,
            is_low_tariff = snapshot.is_low_tariff,
            minutes_to_low_tariff = snapshot.minutes_to_low_tariff,
            minutes_to_high_tariff = snapshot.minutes_to_high_tariff,
            n_periods = snapshot.periods.len(),
            "snapshot",
        );
        Ok(())
    }
}

/// Prints one JSON document per line.
pub struct JsonLines;

impl Observer for JsonLines {
    fn name(&self) -> &'static str {
        "json"
    }

    fn on_snapshot(&self, snapshot: &Snapshot) -> Result {
        println!("{}", serde_json::to_string(snapshot)?);
        Ok(())
    }
}

/// Renders the periods and the sensors.
pub struct Tables {
    appliances: Vec<Appliance>,
}

impl Tables {
    pub const fn new(appliances: Vec<Appliance>) -> Self {
        Self { appliances }
    }
}

impl Observer for Tables {
    fn name(&self) -> &'static str {
        "tables"
    }

    fn on_snapshot(&self, snapshot: &Snapshot) -> Result {
        println!("{}", build_periods_table(&snapshot.periods, snapshot.evaluated_at));
        println!("{}", build_snapshot_table(snapshot, &self.appliances));
        Ok(())
    }
}
