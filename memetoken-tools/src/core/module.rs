// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment module descriptors.
//!
//! A module names a contract and the constructor arguments it should be deployed with. Arguments
//! are either constants or named parameters with defaults that callers may override. Nothing is
//! validated here: bad values surface when the arguments are encoded or the constructor runs.

use std::collections::BTreeMap;

use super::parameters::ModuleParameters;

/// Module id of the MeMeToken deployment.
pub const MODULE_ID: &str = "MeMeTokenDeployer";
/// Contract (artifact) name deployed by the module.
pub const CONTRACT_NAME: &str = "MeMeToken";

pub const TOKEN_NAME: &str = "myMeMeToken";
pub const TOKEN_SYMBOL: &str = "MMTK";

pub const INITIAL_SUPPLY_PARAM: &str = "initialSupply";
pub const UNISWAP_ROUTER_PARAM: &str = "uniswapRouter";

/// 90M tokens with 18 decimals.
pub const DEFAULT_INITIAL_SUPPLY: &str = "90000000000000000000000000";
pub const DEFAULT_UNISWAP_ROUTER: &str = "0xeE567Fe1712Faf6149d80dA1E6934E354124CfE3";

/// Request to deploy a single contract with an ordered list of constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDeployment {
    pub module_id: String,
    pub contract: String,
    pub args: Vec<String>,
    /// Named parameters as resolved while building the module.
    pub parameters: BTreeMap<String, String>,
}

impl ContractDeployment {
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }
}

/// Builds a [`ContractDeployment`] from caller-supplied parameters.
#[derive(Debug)]
pub struct ModuleBuilder<'a> {
    id: &'a str,
    overrides: &'a ModuleParameters,
    resolved: BTreeMap<String, String>,
}

impl<'a> ModuleBuilder<'a> {
    pub fn new(id: &'a str, overrides: &'a ModuleParameters) -> Self {
        Self {
            id,
            overrides,
            resolved: BTreeMap::new(),
        }
    }

    /// Value of a named parameter, or `default` if the caller did not supply one.
    pub fn get_parameter(&mut self, name: &str, default: &str) -> String {
        let value = self.overrides.get(name).unwrap_or(default).to_string();
        self.resolved.insert(name.to_string(), value.clone());
        value
    }

    pub fn contract(self, name: &str, args: Vec<String>) -> ContractDeployment {
        ContractDeployment {
            module_id: self.id.to_string(),
            contract: name.to_string(),
            args,
            parameters: self.resolved,
        }
    }
}

/// The `MeMeTokenDeployer` module.
///
/// Constructor arguments are `[name, symbol, initialSupply, uniswapRouter]`; only the last two
/// can be overridden. Unrecognized parameters are ignored.
pub fn meme_token_module(parameters: &ModuleParameters) -> ContractDeployment {
    let mut m = ModuleBuilder::new(MODULE_ID, parameters);
    let initial_supply = m.get_parameter(INITIAL_SUPPLY_PARAM, DEFAULT_INITIAL_SUPPLY);
    let uniswap_router = m.get_parameter(UNISWAP_ROUTER_PARAM, DEFAULT_UNISWAP_ROUTER);
    m.contract(
        CONTRACT_NAME,
        vec![
            TOKEN_NAME.to_string(),
            TOKEN_SYMBOL.to_string(),
            initial_supply,
            uniswap_router,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let deployment = meme_token_module(&ModuleParameters::new());
        assert_eq!(deployment.module_id, "MeMeTokenDeployer");
        assert_eq!(deployment.contract, "MeMeToken");
        assert_eq!(
            deployment.args,
            vec![
                "myMeMeToken",
                "MMTK",
                "90000000000000000000000000",
                "0xeE567Fe1712Faf6149d80dA1E6934E354124CfE3",
            ]
        );
    }

    #[test]
    fn initial_supply_override() {
        let params = ModuleParameters::new().with(INITIAL_SUPPLY_PARAM, "123");
        let deployment = meme_token_module(&params);
        assert_eq!(
            deployment.args,
            vec![
                "myMeMeToken",
                "MMTK",
                "123",
                "0xeE567Fe1712Faf6149d80dA1E6934E354124CfE3",
            ]
        );
        assert_eq!(deployment.parameter(INITIAL_SUPPLY_PARAM), Some("123"));
    }

    #[test]
    fn router_override_is_not_validated() {
        let params = ModuleParameters::new().with(UNISWAP_ROUTER_PARAM, "definitely not an address");
        let deployment = meme_token_module(&params);
        assert_eq!(deployment.args[3], "definitely not an address");
        assert_eq!(&deployment.args[..3], &["myMeMeToken", "MMTK", DEFAULT_INITIAL_SUPPLY]);
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let params = ModuleParameters::new()
            .with("name", "other")
            .with("symbol", "OTHR");
        let deployment = meme_token_module(&params);
        assert_eq!(deployment, meme_token_module(&ModuleParameters::new()));
    }

    #[test]
    fn resolved_parameters_are_recorded() {
        let deployment = meme_token_module(&ModuleParameters::new());
        assert_eq!(
            deployment.parameter(INITIAL_SUPPLY_PARAM),
            Some(DEFAULT_INITIAL_SUPPLY)
        );
        assert_eq!(
            deployment.parameter(UNISWAP_ROUTER_PARAM),
            Some(DEFAULT_UNISWAP_ROUTER)
        );
        assert_eq!(deployment.parameter("name"), None);
    }
}
