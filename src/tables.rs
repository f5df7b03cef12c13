use std::time::Duration;

use chrono::NaiveTime;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    cli::Appliance,
    core::{period::Period, snapshot::Snapshot, tariff::TariffKind},
};

pub fn build_periods_table(periods: &[Period], now: NaiveTime) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tariff", "Start", "End", "Duration"]);
    for period in periods {
        let mut tariff = Cell::new(period.tariff).fg(period.tariff.color());
        if period.contains(now) {
            tariff = tariff.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            tariff,
            Cell::new(period.start.format("%H:%M")),
            Cell::new(period.end.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(format_minutes(period.duration_minutes()))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_snapshot_table(snapshot: &Snapshot, appliances: &[Appliance]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Sensor", "Value"]);
    table.add_row(vec![
        Cell::new("Current tariff"),
        snapshot.current_tariff.map_or_else(
            || Cell::new("unknown").add_attribute(Attribute::Dim),
            |tariff| Cell::new(tariff).fg(tariff.color()),
        ),
    ]);
    table.add_row(vec![
        Cell::new("Low tariff"),
        Cell::new(if snapshot.is_low_tariff { "on" } else { "off" })
            .fg(TariffKind::Low.color()),
    ]);
    for (name, minutes) in [
        ("Next change in", snapshot.minutes_to_next_change),
        ("Low tariff in", snapshot.minutes_to_low_tariff),
        ("High tariff in", snapshot.minutes_to_high_tariff),
    ] {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_minutes(minutes)).set_alignment(CellAlignment::Right),
        ]);
    }
    for appliance in appliances {
        let can_run = snapshot.can_appliance_run(appliance.minutes);
        table.add_row(vec![
            Cell::new(format!("Can run {} ({} min)", appliance.name, appliance.minutes)),
            Cell::new(if can_run { "yes" } else { "no" }).fg(if can_run {
                Color::Green
            } else {
                Color::Red
            }),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn format_minutes(minutes: u32) -> String {
    if minutes == 0 {
        return "0m".to_owned();
    }
    humantime::format_duration(Duration::from_secs(u64::from(minutes) * 60)).to_string()
}
