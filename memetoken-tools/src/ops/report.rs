// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Report on a token that is already deployed.

use std::{fs, io, path::Path};

use alloy::{primitives::Address, providers::Provider};
use chrono::Utc;

use crate::core::{
    module::{ContractDeployment, UNISWAP_ROUTER_PARAM},
    network::current_network,
    report::{read_state, write_state, ContractInfo, DeploymentInfo, TokenState},
    token::meme_token,
};

/// Reads back a deployed token and prints its state and deployment info.
///
/// The owner stands in for the deployer and the total supply for the initial supply, since
/// neither can be recovered from the contract itself.
pub async fn report(
    address: Address,
    deployment: &ContractDeployment,
    output: Option<&Path>,
    provider: &impl Provider,
) -> crate::Result<DeploymentInfo> {
    let network = current_network(provider).await?;

    greyln!("\nReading token at {}...", address);
    let state = read_state(&meme_token(address, provider)).await?;

    let contract = ContractInfo::new(&state.name, address, &state.symbol, state.owner);
    let info = DeploymentInfo::new(
        network,
        Utc::now(),
        contract,
        &state.total_supply.to_string(),
        deployment.parameter(UNISWAP_ROUTER_PARAM).unwrap_or_default(),
        &state,
    );
    print_report(&state, &info, output)?;
    Ok(info)
}

/// Prints the token state followed by the deployment info JSON, optionally saving the JSON.
pub(crate) fn print_report(
    state: &TokenState,
    info: &DeploymentInfo,
    output: Option<&Path>,
) -> crate::Result<()> {
    write_state(&mut io::stdout().lock(), state)?;

    let json = info.to_json()?;
    println!("\nDeployment Info JSON:");
    println!("{json}");

    if let Some(path) = output {
        fs::write(path, &json)?;
        info!(@grey, "wrote deployment info to {}", path.display());
    }
    Ok(())
}
