// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use memetoken_tools::ops;

use crate::{common_args::ParameterArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    parameters: ParameterArgs,
}

pub fn exec(args: Args) -> CliResult {
    let deployment = args.parameters.deployment()?;
    ops::plan(&deployment, &mut io::stdout().lock())?;
    Ok(())
}
