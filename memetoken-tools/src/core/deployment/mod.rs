// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploying a module's contract from its compiled artifact.

use alloy::{
    primitives::{Address, TxHash},
    providers::{Provider, WalletProvider},
};

use super::{artifact::ContractArtifact, module::ContractDeployment};
use crate::utils::{color::DebugColor, format_gas};

pub use constructor::{creation_code, encode_args};
pub use request::DeploymentRequest;

pub mod constructor;
pub mod request;

#[derive(Debug, Default)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    pub estimate_gas: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt")]
    MissingReceiptAddress,
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// A contract deployed on chain.
#[derive(Debug, Clone, Copy)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

/// Builds the creation transaction for `deployment`, sent from the provider's default signer.
pub fn creation_request(
    deployment: &ContractDeployment,
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    sender: Address,
) -> Result<DeploymentRequest, DeploymentError> {
    let encoded = encode_args(artifact.constructor(), &deployment.args)?;
    let code = creation_code(&artifact.bytecode, &encoded);
    Ok(DeploymentRequest::new(sender, code, config.max_fee_per_gas_wei))
}

/// Deploys the module's contract and waits for it to be mined.
pub async fn deploy(
    deployment: &ContractDeployment,
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<DeployedContract, DeploymentError> {
    let sender = provider.default_signer_address();
    debug!(@grey, "sender address: {}", sender.debug_lavender());

    let receipt = creation_request(deployment, artifact, config, sender)?
        .exec(provider)
        .await?;
    let address = receipt
        .contract_address
        .ok_or(DeploymentError::MissingReceiptAddress)?;

    info!(@grey, "deployed code at address: {}", address.debug_lavender());
    debug!(@grey, "gas used: {}", format_gas(receipt.gas_used));
    info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

    Ok(DeployedContract {
        address,
        tx_hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
    })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, TxKind};

    use super::*;
    use crate::core::{
        artifact::tests::TOKEN_ARTIFACT, module::meme_token_module,
        parameters::ModuleParameters,
    };

    #[test]
    fn request_carries_creation_code() {
        let artifact = ContractArtifact::from_json(TOKEN_ARTIFACT).unwrap();
        let params = ModuleParameters::new()
            .with("uniswapRouter", "0x7a250d5630b4cf539739df2c5dacb4c659f2488d");
        let deployment = meme_token_module(&params);
        let sender = address!("3f1eae7d46d88f08fc2f8ed27fcb2ab183eb2d0e");

        let req =
            creation_request(&deployment, &artifact, &DeploymentConfig::default(), sender)
                .unwrap();
        let tx = req.tx();
        assert_eq!(tx.from, Some(sender));
        assert_eq!(tx.to, Some(TxKind::Create));

        let encoded = encode_args(artifact.constructor(), &deployment.args).unwrap();
        let expected = creation_code(&artifact.bytecode, &encoded);
        assert_eq!(tx.input.input().map(|b| b.to_vec()), Some(expected));
    }

    #[test]
    fn request_fails_on_bad_arguments() {
        let artifact = ContractArtifact::from_json(TOKEN_ARTIFACT).unwrap();
        let params = ModuleParameters::new().with("initialSupply", "ninety million");
        let deployment = meme_token_module(&params);
        let err = creation_request(
            &deployment,
            &artifact,
            &DeploymentConfig::default(),
            Address::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }
}
