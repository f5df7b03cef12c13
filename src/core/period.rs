use std::fmt::{Debug, Formatter};

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::core::tariff::TariffKind;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Single tariff period of a day.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Period {
    pub tariff: TariffKind,

    /// Inclusive.
    #[serde(serialize_with = "serialize_wall_time")]
    pub start: NaiveTime,

    /// Exclusive. `00:00` stands for the end of the day.
    #[serde(serialize_with = "serialize_wall_time")]
    pub end: NaiveTime,
}

impl Debug for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}..{})", self.tariff, self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl Period {
    pub const fn new(tariff: TariffKind, start: NaiveTime, end: NaiveTime) -> Self {
        Self { tariff, start, end }
    }

    /// Whether the period runs until midnight.
    #[must_use]
    pub fn is_wrapping(self) -> bool {
        self.end == NaiveTime::MIN
    }

    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        if self.is_wrapping() {
            self.start <= time
        } else {
            (self.start <= time) && (time < self.end)
        }
    }

    /// Whole minutes from `time` until the period ends.
    #[must_use]
    pub fn minutes_remaining(self, time: NaiveTime) -> u32 {
        self.end_minutes().saturating_sub(minutes_since_midnight(time))
    }

    #[must_use]
    pub fn duration_minutes(self) -> u32 {
        self.end_minutes().saturating_sub(minutes_since_midnight(self.start))
    }

    fn end_minutes(self) -> u32 {
        if self.is_wrapping() { MINUTES_PER_DAY } else { minutes_since_midnight(self.end) }
    }
}

/// Seconds are truncated.
#[must_use]
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

pub fn serialize_wall_time<S: Serializer>(
    time: &NaiveTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}
