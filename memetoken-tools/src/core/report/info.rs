// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::TokenState;

/// Summary of a deployment, printed as JSON once the token has been read back.
///
/// Amounts are decimal strings and addresses are checksummed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub network: String,
    pub timestamp: String,
    pub contract: ContractInfo,
    pub parameters: Parameters,
    pub tax_settings: TaxSettings,
    pub limits: Limits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractInfo {
    pub name: String,
    pub address: String,
    pub symbol: String,
    pub deployer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub initial_supply: String,
    pub uniswap_router: String,
    pub uniswap_pair: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    pub buy_tax: String,
    pub sell_tax: String,
    pub transfer_tax: String,
    pub tax_recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub max_transaction_amount: String,
    pub max_wallet_balance: String,
    pub cooldown_period: String,
}

impl ContractInfo {
    pub fn new(name: &str, address: Address, symbol: &str, deployer: Address) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            symbol: symbol.to_string(),
            deployer: deployer.to_string(),
        }
    }
}

impl DeploymentInfo {
    pub fn new(
        network: &str,
        timestamp: DateTime<Utc>,
        contract: ContractInfo,
        initial_supply: &str,
        uniswap_router: &str,
        state: &TokenState,
    ) -> Self {
        Self {
            network: network.to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            contract,
            parameters: Parameters {
                initial_supply: initial_supply.to_string(),
                uniswap_router: uniswap_router.to_string(),
                uniswap_pair: state.uniswap_v2_pair.to_string(),
            },
            tax_settings: TaxSettings {
                buy_tax: state.buy_tax.to_string(),
                sell_tax: state.sell_tax.to_string(),
                transfer_tax: state.transfer_tax.to_string(),
                tax_recipient: state.tax_recipient.to_string(),
            },
            limits: Limits {
                max_transaction_amount: state.max_transaction_amount.to_string(),
                max_wallet_balance: state.max_wallet_balance.to_string(),
                cooldown_period: state.cooldown_period.to_string(),
            },
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::core::report::tests::{sample_state, OWNER, PAIR};

    const TOKEN: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

    fn sample_info() -> DeploymentInfo {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        let contract = ContractInfo::new("myMeMeToken", TOKEN, "MMTK", OWNER);
        DeploymentInfo::new(
            "hardhat",
            timestamp,
            contract,
            "90000000000000000000000000",
            "0xeE567Fe1712Faf6149d80dA1E6934E354124CfE3",
            &sample_state(),
        )
    }

    #[test]
    fn serializes_nested_record() {
        let value: serde_json::Value =
            serde_json::from_str(&sample_info().to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "network": "hardhat",
                "timestamp": "2025-03-04T05:06:07.000Z",
                "contract": {
                    "name": "myMeMeToken",
                    "address": TOKEN.to_string(),
                    "symbol": "MMTK",
                    "deployer": OWNER.to_string(),
                },
                "parameters": {
                    "initialSupply": "90000000000000000000000000",
                    "uniswapRouter": "0xeE567Fe1712Faf6149d80dA1E6934E354124CfE3",
                    "uniswapPair": PAIR.to_string(),
                },
                "taxSettings": {
                    "buyTax": "5",
                    "sellTax": "5",
                    "transferTax": "1",
                    "taxRecipient": OWNER.to_string(),
                },
                "limits": {
                    "maxTransactionAmount": "900000",
                    "maxWalletBalance": "1800000",
                    "cooldownPeriod": "30",
                },
            })
        );
    }

    #[test]
    fn keeps_field_order_and_indentation() {
        let text = sample_info().to_json().unwrap();
        assert!(text.starts_with("{\n  \"network\": \"hardhat\",\n  \"timestamp\""));
        let contract = text.find("\"contract\"").unwrap();
        let limits = text.find("\"limits\"").unwrap();
        assert!(contract < limits);
    }

    #[test]
    fn addresses_are_checksummed() {
        let info = sample_info();
        assert_eq!(info.contract.address, TOKEN.to_checksum(None));
        assert!(info.contract.address.starts_with("0x"));
    }
}
