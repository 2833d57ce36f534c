// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod deploy;
mod plan;
mod report;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the token and report its on-chain state
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print the contract and constructor arguments the module would deploy
    #[clap(visible_alias = "p")]
    Plan(plan::Args),
    /// Report the on-chain state of an already deployed token
    #[clap(visible_alias = "r")]
    Report(report::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Plan(args) => plan::exec(args),
        Command::Report(args) => report::exec(args).await,
    }
}
