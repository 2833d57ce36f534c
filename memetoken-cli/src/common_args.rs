// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use memetoken_tools::core::{
    artifact::{ArtifactError, ContractArtifact, DEFAULT_ARTIFACT_PATH},
    deployment::DeploymentConfig,
    module::{
        meme_token_module, ContractDeployment, INITIAL_SUPPLY_PARAM, MODULE_ID,
        UNISWAP_ROUTER_PARAM,
    },
    parameters::{ModuleParameters, ParametersError, ParametersFile},
};

use crate::{
    constants::DEFAULT_ENDPOINT,
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            let signer = signer_from_hex(key)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            let signer = signer_from_hex(key)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!(
            "no wallet given: use --private-key, --private-key-path or --keystore-path"
        ))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn signer_from_hex(key: impl AsRef<str>) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(bytes.as_slice());
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint of the node to deploy to
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

/// Parameters of the `MeMeTokenDeployer` module.
#[derive(Debug, clap::Args)]
pub struct ParameterArgs {
    /// JSON file with module parameters, keyed by module id
    #[arg(long, value_name = "FILE")]
    parameters: Option<PathBuf>,
    /// Initial token supply in base units. Overrides the parameters file.
    #[arg(long)]
    initial_supply: Option<String>,
    /// Address of the Uniswap V2 router. Overrides the parameters file.
    #[arg(long)]
    uniswap_router: Option<String>,
}

impl ParameterArgs {
    pub fn module_parameters(&self) -> Result<ModuleParameters, ParametersError> {
        let mut params = match &self.parameters {
            Some(path) => ParametersFile::load(path)?.module(MODULE_ID)?,
            None => ModuleParameters::new(),
        };
        params.merge(self.flag_parameters());
        Ok(params)
    }

    fn flag_parameters(&self) -> ModuleParameters {
        let mut params = ModuleParameters::new();
        if let Some(supply) = &self.initial_supply {
            params.set(INITIAL_SUPPLY_PARAM, supply.clone());
        }
        if let Some(router) = &self.uniswap_router {
            params.set(UNISWAP_ROUTER_PARAM, router.clone());
        }
        params
    }

    pub fn deployment(&self) -> Result<ContractDeployment, ParametersError> {
        Ok(meme_token_module(&self.module_parameters()?))
    }
}

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Compiled contract artifact (JSON with `abi` and `bytecode`)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,
}

impl ArtifactArgs {
    pub fn load(&self) -> Result<ContractArtifact, ArtifactError> {
        ContractArtifact::load(&self.artifact)
    }
}

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
}

impl DeployArgs {
    pub fn config(&self, auth: &AuthArgs) -> eyre::Result<DeploymentConfig> {
        Ok(DeploymentConfig {
            max_fee_per_gas_wei: auth.get_max_fee_per_gas_wei()?,
            estimate_gas: self.estimate_gas,
        })
    }
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Also write the deployment info JSON to this file.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
