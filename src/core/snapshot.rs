use chrono::NaiveTime;
use serde::Serialize;

use crate::core::{
    period::{Period, serialize_wall_time},
    tariff::TariffKind,
};

/// Tariff state derived from one day's periods at a specific wall time.
///
/// The default value doubles as «no data available».
#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    /// Wall time the values below were computed for.
    #[serde(serialize_with = "serialize_wall_time")]
    pub evaluated_at: NaiveTime,

    pub periods: Vec<Period>,
    pub current_tariff: Option<TariffKind>,
    pub is_low_tariff: bool,
    pub minutes_to_next_change: u32,
    pub minutes_to_low_tariff: u32,
    pub minutes_to_high_tariff: u32,
}

impl Snapshot {
    /// Whether an appliance started now would finish before the high tariff kicks in.
    #[must_use]
    pub const fn can_appliance_run(&self, minutes_needed: u32) -> bool {
        self.is_low_tariff && (minutes_needed < self.minutes_to_high_tariff)
    }
}

/// Tariff of the first period containing `now`.
///
/// A `now` falling into a coverage gap gets the last period's tariff.
#[must_use]
pub fn current_tariff(periods: &[Period], now: NaiveTime) -> Option<TariffKind> {
    let last = periods.last()?;
    Some(find_current(periods, now).map_or(last.tariff, |(_, period)| period.tariff))
}

/// Minutes left in the period containing `now`, or zero if none contains it.
///
/// Unlike [`current_tariff`], there is no fallback for coverage gaps.
#[must_use]
pub fn time_remaining(periods: &[Period], now: NaiveTime) -> u32 {
    find_current(periods, now).map_or(0, |(_, period)| period.minutes_remaining(now))
}

pub fn build_snapshot(periods: Vec<Period>, now: NaiveTime) -> Snapshot {
    if periods.is_empty() {
        return Snapshot { evaluated_at: now, ..Snapshot::default() };
    }

    let current_tariff = current_tariff(&periods, now);
    let remaining = time_remaining(&periods, now);

    let (minutes_to_low_tariff, minutes_to_high_tariff) = match current_tariff {
        Some(TariffKind::Low) => (0, remaining),
        Some(TariffKind::High) => {
            // Walk the rest of the day until the next low period begins.
            // With no low period left today, this is only the time until midnight.
            let next_index = find_current(&periods, now).map_or(0, |(index, _)| index + 1);
            let upcoming_high: u32 = periods[next_index..]
                .iter()
                .take_while(|period| period.tariff == TariffKind::High)
                .map(|period| period.duration_minutes())
                .sum();
            (remaining + upcoming_high, 0)
        }
        None => (0, 0),
    };

    Snapshot {
        evaluated_at: now,
        is_low_tariff: current_tariff == Some(TariffKind::Low),
        current_tariff,
        minutes_to_next_change: remaining,
        minutes_to_low_tariff,
        minutes_to_high_tariff,
        periods,
    }
}

fn find_current(periods: &[Period], now: NaiveTime) -> Option<(usize, &Period)> {
    periods.iter().enumerate().find(|(_, period)| period.contains(now))
}
