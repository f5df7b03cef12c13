use thiserror::Error;

use crate::core::parser::ParseError;

/// Failure to obtain the markup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to call the HDO endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response envelope")]
    Envelope(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to parse the HDO periods")]
    Parse(#[from] ParseError),
}
