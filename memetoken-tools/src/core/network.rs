// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::providers::Provider;

/// Conventional name of a chain, `unknown` for chains not listed here.
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "mainnet",
        10 => "optimism",
        56 => "bnb",
        137 => "matic",
        1337 => "localhost",
        8453 => "base",
        17000 => "holesky",
        31337 => "hardhat",
        42161 => "arbitrum",
        421614 => "arbitrum-sepolia",
        11155111 => "sepolia",
        _ => "unknown",
    }
}

/// Name of the network the provider is connected to.
pub async fn current_network(provider: &impl Provider) -> crate::Result<&'static str> {
    let chain_id = provider.get_chain_id().await?;
    debug!(@grey, "connected to chain id {}", chain_id);
    Ok(network_name(chain_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chains() {
        assert_eq!(network_name(1), "mainnet");
        assert_eq!(network_name(11155111), "sepolia");
        assert_eq!(network_name(31337), "hardhat");
    }

    #[test]
    fn unknown_chain() {
        assert_eq!(network_name(987_654_321), "unknown");
    }
}
