// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use memetoken_tools::ops;

use crate::{
    common_args::{OutputArgs, ParameterArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address of the deployed token
    #[arg(long)]
    address: Address,

    #[command(flatten)]
    parameters: ParameterArgs,
    #[command(flatten)]
    output: OutputArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let deployment = args.parameters.deployment()?;
    let provider = args.provider.build_provider().await?;
    ops::report(
        args.address,
        &deployment,
        args.output.output.as_deref(),
        &provider,
    )
    .await?;
    Ok(())
}
