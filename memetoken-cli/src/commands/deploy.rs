// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use memetoken_tools::ops;

use crate::{
    common_args::{ArtifactArgs, AuthArgs, DeployArgs, OutputArgs, ParameterArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    deploy: DeployArgs,
    #[command(flatten)]
    parameters: ParameterArgs,
    #[command(flatten)]
    artifact: ArtifactArgs,
    #[command(flatten)]
    output: OutputArgs,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let deployment = args.parameters.deployment()?;
    let artifact = args.artifact.load()?;
    let config = args.deploy.config(&args.auth)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;

    if config.estimate_gas {
        ops::estimate_gas(&deployment, &artifact, &config, &provider).await?;
    } else {
        ops::deploy(
            &deployment,
            &artifact,
            &config,
            args.output.output.as_deref(),
            &provider,
        )
        .await?;
    }
    Ok(())
}
