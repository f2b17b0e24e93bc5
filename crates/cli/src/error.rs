use std::process::ExitCode;

use quadroots_core::ConfigError;
use thiserror::Error;

use crate::InputError;

/// Errors that end a solver session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Wrong input: {0}")]
    Input(#[from] InputError),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// Invalid input exits with 1 and invalid configuration with 2.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config(_) => ExitCode::from(2),
            Error::Input(_) | Error::Output(_) | Error::Encode(_) => ExitCode::FAILURE,
        }
    }
}
