// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy the token, then verify the deployment by reading its state back.

use std::path::Path;

use alloy::{
    primitives::{utils::format_units, Address, U256},
    providers::{Provider, WalletProvider},
};
use chrono::Utc;

use super::report::print_report;
use crate::{
    core::{
        artifact::ContractArtifact,
        deployment::{creation_request, deploy as deploy_contract, DeploymentConfig},
        module::{
            ContractDeployment, INITIAL_SUPPLY_PARAM, TOKEN_NAME, TOKEN_SYMBOL,
            UNISWAP_ROUTER_PARAM,
        },
        network::current_network,
        report::{read_state, ContractInfo, DeploymentInfo},
        token::meme_token,
    },
    utils::color::DebugColor,
};

/// Deploys the module's contract and prints a report of the deployed token.
///
/// Every step runs after the previous one completes; the first error is returned as is.
pub async fn deploy(
    deployment: &ContractDeployment,
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    output: Option<&Path>,
    provider: &(impl Provider + WalletProvider),
) -> crate::Result<DeploymentInfo> {
    let deployer = provider.default_signer_address();
    let balance = provider.get_balance(deployer).await?;
    for line in account_summary(deployer, balance) {
        greyln!("{}", line);
    }

    print_parameters(deployment);

    greyln!("\nDeploying {} contract...", deployment.contract);
    let deployed = deploy_contract(deployment, artifact, config, provider).await?;
    mintln!("{} deployed to: {}", deployment.contract, deployed.address);

    greyln!("\nVerifying deployment...");
    let state = read_state(&meme_token(deployed.address, provider)).await?;

    let network = current_network(provider).await?;
    let contract = ContractInfo::new(TOKEN_NAME, deployed.address, TOKEN_SYMBOL, deployer);
    let info = DeploymentInfo::new(
        network,
        Utc::now(),
        contract,
        deployment.parameter(INITIAL_SUPPLY_PARAM).unwrap_or_default(),
        deployment.parameter(UNISWAP_ROUTER_PARAM).unwrap_or_default(),
        &state,
    );
    print_report(&state, &info, output)?;
    Ok(info)
}

/// Estimates the gas and cost of deploying the module's contract without sending anything.
pub async fn estimate_gas(
    deployment: &ContractDeployment,
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> crate::Result<()> {
    print_parameters(deployment);

    let sender = provider.default_signer_address();
    let req = creation_request(deployment, artifact, config, sender)?;
    let gas = req.estimate_gas(provider).await?;
    let gas_price = req.fee_per_gas(provider).await?;

    greyln!("\nestimates");
    greyln!("deployment tx gas: {}", gas.debug_lavender());
    greyln!(
        "gas price: {} gwei",
        format_units(gas_price, "gwei")?.debug_lavender()
    );

    let total_cost = gas_price.checked_mul(gas.into()).unwrap_or_default();
    greyln!(
        "deployment tx total cost: {} ETH",
        format_units(total_cost, "ether")?.debug_lavender()
    );
    Ok(())
}

/// Balance is shown in wei.
fn account_summary(deployer: Address, balance: U256) -> [String; 2] {
    [
        format!("Deploying contracts with the account: {deployer}"),
        format!("Account balance: {balance}"),
    ]
}

fn print_parameters(deployment: &ContractDeployment) {
    greyln!("\nDeployment Parameters:");
    greyln!("Token Name: {}", TOKEN_NAME);
    greyln!("Token Symbol: {}", TOKEN_SYMBOL);
    greyln!(
        "Initial Supply: {}",
        deployment.parameter(INITIAL_SUPPLY_PARAM).unwrap_or_default()
    );
    greyln!(
        "Uniswap Router: {}",
        deployment.parameter(UNISWAP_ROUTER_PARAM).unwrap_or_default()
    );
}
