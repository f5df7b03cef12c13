use std::str::FromStr;

use clap::Parser;

use crate::prelude::*;

#[derive(Parser)]
pub struct AppliancesArgs {
    /// Appliance that should only run within the low tariff, as `NAME=MINUTES`.
    #[clap(long = "appliance", env = "APPLIANCES", value_delimiter = ',')]
    pub appliances: Vec<Appliance>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Appliance {
    pub name: String,

    /// Run time needed to complete a cycle.
    pub minutes: u32,
}

impl FromStr for Appliance {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (name, minutes) = text.split_once('=').context("expected `NAME=MINUTES`")?;
        let name = name.trim();
        ensure!(!name.is_empty(), "the appliance name is empty");
        let minutes = minutes
            .trim()
            .parse()
            .with_context(|| format!("invalid number of minutes `{minutes}`"))?;
        Ok(Self { name: name.to_owned(), minutes })
    }
}
