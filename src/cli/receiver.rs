use clap::Parser;
use reqwest::Url;

use crate::{api::predistribuce, cli::clock::Clock, prelude::*};

#[derive(Parser)]
pub struct ReceiverArgs {
    /// HDO receiver command code, for example `492`.
    #[clap(long = "command-id", env = "RECEIVER_COMMAND_ID")]
    command_id: String,

    /// `hdoOneDayAjax` endpoint URL.
    #[clap(long = "hdo-url", env = "HDO_URL", default_value = predistribuce::HDO_ONE_DAY_URL)]
    url: Url,

    #[clap(long = "request-timeout", env = "REQUEST_TIMEOUT", default_value = "30s")]
    request_timeout: humantime::Duration,

    /// Clock to pick the day and the current time from.
    #[clap(long, env = "CLOCK", value_enum, default_value = "utc")]
    pub clock: Clock,
}

impl ReceiverArgs {
    pub fn command_id(&self) -> &str {
        self.command_id.trim()
    }

    pub fn new_client(&self) -> Result<predistribuce::Client> {
        predistribuce::Client::new(self.url.clone(), self.request_timeout.into())
    }
}
