// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor argument encoding.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
};

use super::DeploymentError::{self, InvalidConstructor};

/// ABI-encodes string constructor arguments against the constructor's input types.
///
/// A contract without a constructor takes no arguments.
pub fn encode_args(
    constructor: Option<&Constructor>,
    args: &[String],
) -> Result<Vec<u8>, DeploymentError> {
    let Some(constructor) = constructor else {
        if args.is_empty() {
            return Ok(Vec::new());
        }
        return Err(InvalidConstructor(format!(
            "contract has no constructor but {} arguments were given",
            args.len()
        )));
    };

    if args.len() != constructor.inputs.len() {
        return Err(InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor.inputs,
            constructor.inputs.len(),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            InvalidConstructor(format!("could not parse constructor arg {param}: {err}"))
        })?;
        values.push(value);
    }

    constructor
        .abi_encode_input_raw(&values)
        .map_err(|err| InvalidConstructor(err.to_string()))
}

/// Creation code: contract bytecode followed by the encoded constructor arguments.
pub fn creation_code(bytecode: &[u8], encoded_args: &[u8]) -> Vec<u8> {
    let mut code = Vec::with_capacity(bytecode.len() + encoded_args.len());
    code.extend_from_slice(bytecode);
    code.extend_from_slice(encoded_args);
    code
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, U256},
        sol_types::SolValue,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        artifact::{tests::TOKEN_ARTIFACT, ContractArtifact},
        module::meme_token_module,
        parameters::ModuleParameters,
    };

    const ROUTER: &str = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";

    fn token_constructor() -> Constructor {
        ContractArtifact::from_json(TOKEN_ARTIFACT)
            .unwrap()
            .constructor()
            .cloned()
            .unwrap()
    }

    #[test]
    fn encodes_module_arguments() {
        let params = ModuleParameters::new()
            .with("initialSupply", "123")
            .with("uniswapRouter", ROUTER);
        let deployment = meme_token_module(&params);

        let encoded = encode_args(Some(&token_constructor()), &deployment.args).unwrap();
        let expected = (
            "myMeMeToken".to_string(),
            "MMTK".to_string(),
            U256::from(123),
            address!("7a250d5630b4cf539739df2c5dacb4c659f2488d"),
        )
            .abi_encode_params();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn invalid_router_is_reported_when_encoding() {
        let params = ModuleParameters::new().with("uniswapRouter", "not-an-address");
        let deployment = meme_token_module(&params);
        let err = encode_args(Some(&token_constructor()), &deployment.args).unwrap_err();
        assert!(matches!(err, InvalidConstructor(_)));
    }

    #[test]
    fn argument_count_must_match() {
        let args = vec!["myMeMeToken".to_string()];
        let err = encode_args(Some(&token_constructor()), &args).unwrap_err();
        assert!(err.to_string().contains("mismatch number of constructor arguments"));
    }

    #[test]
    fn no_constructor_takes_no_arguments() {
        assert_eq!(encode_args(None, &[]).unwrap(), Vec::<u8>::new());
        assert!(encode_args(None, &["1".to_string()]).is_err());
    }

    #[test]
    fn appends_arguments_to_bytecode() {
        assert_eq!(creation_code(&[0x60, 0x80], &[0x01]), vec![0x60, 0x80, 0x01]);
    }
}
