use chrono::{Local, NaiveDateTime, Utc};
use clap::ValueEnum;

/// Wall clock the schedule is evaluated against.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum Clock {
    /// Coordinated universal time.
    #[default]
    Utc,

    /// System time zone.
    Local,
}

impl Clock {
    #[must_use]
    pub fn now(self) -> NaiveDateTime {
        match self {
            Self::Utc => Utc::now().naive_utc(),
            Self::Local => Local::now().naive_local(),
        }
    }
}
