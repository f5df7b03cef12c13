use clap::Parser;

use crate::{cli::receiver::ReceiverArgs, prelude::*};

#[derive(Parser)]
pub struct ValidateArgs {
    #[clap(flatten)]
    receiver: ReceiverArgs,
}

impl ValidateArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let command_id = self.receiver.command_id();
        ensure!(!command_id.is_empty(), "the receiver command ID is empty");
        if self.receiver.new_client()?.validate_command_id(command_id).await {
            info!(command_id, "found the HDO schedule");
            Ok(())
        } else {
            bail!("no HDO schedule found for the receiver command `{command_id}`")
        }
    }
}
