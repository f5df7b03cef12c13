use std::str::FromStr;

use comfy_table::Color;
use derive_more::Display;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::prelude::*;

/// HDO tariff as switched by the ripple-control receiver.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, SerializeDisplay, DeserializeFromStr)]
pub enum TariffKind {
    /// Discounted off-peak rate («nízký tarif»).
    #[display("NT")]
    Low,

    /// Standard rate («vysoký tarif»).
    #[display("VT")]
    High,
}

impl FromStr for TariffKind {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "NT" => Ok(Self::Low),
            "VT" => Ok(Self::High),
            _ => bail!("unknown tariff code `{code}`"),
        }
    }
}

impl TariffKind {
    pub const fn color(self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::High => Color::Red,
        }
    }
}
