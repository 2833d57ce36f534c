// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use memetoken_tools::core::{artifact::ArtifactError, parameters::ParametersError};

pub type CliResult = Result<(), CliError>;

/// Error reported by `main`, along with the exit code of the process.
#[derive(Debug)]
pub struct CliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CliError {
    fn failure(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl From<eyre::Error> for CliError {
    fn from(error: eyre::Error) -> Self {
        Self::failure(error)
    }
}

impl From<memetoken_tools::Error> for CliError {
    fn from(err: memetoken_tools::Error) -> Self {
        Self::failure(err)
    }
}

impl From<ParametersError> for CliError {
    fn from(err: ParametersError) -> Self {
        Self::failure(err)
    }
}

impl From<ArtifactError> for CliError {
    fn from(err: ArtifactError) -> Self {
        Self::failure(err)
    }
}
