// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Show what a module would deploy without touching the network.

use std::io::Write;

use crate::core::module::ContractDeployment;

pub fn plan(deployment: &ContractDeployment, out: &mut impl Write) -> crate::Result<()> {
    writeln!(out, "Module: {}", deployment.module_id)?;
    writeln!(out, "Contract: {}", deployment.contract)?;
    writeln!(out, "Parameters:")?;
    for (name, value) in &deployment.parameters {
        writeln!(out, "  {name} = {value}")?;
    }
    writeln!(out, "Constructor arguments:")?;
    for (i, arg) in deployment.args.iter().enumerate() {
        writeln!(out, "  [{i}] {arg}")?;
    }
    Ok(())
}
