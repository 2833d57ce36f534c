// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Reading back the state of a deployed token.
//!
//! The getters are called one at a time in a fixed order. The first failing call aborts the read
//! and its error is returned unchanged.

use std::fmt;

use alloy::{
    network::Network,
    primitives::{Address, U256},
    providers::Provider,
};

use super::token::IMeMeToken::IMeMeTokenInstance;

pub use info::{ContractInfo, DeploymentInfo, Limits, Parameters, TaxSettings};
pub use render::write_state;

mod info;
mod render;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to call {getter}(): {source}")]
    Call {
        getter: Getter,
        source: alloy::contract::Error,
    },
    #[error("{getter}() does not return {expected}")]
    UnexpectedKind { getter: Getter, expected: ValueKind },
}

/// Type of value returned by a getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Amount,
    Account,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "a string",
            Self::Amount => "a uint256",
            Self::Account => "an address",
        })
    }
}

/// Public getters of the token contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Getter {
    Name,
    Symbol,
    TotalSupply,
    Owner,
    UniswapV2Pair,
    BuyTax,
    SellTax,
    TransferTax,
    TaxRecipient,
    MaxTransactionAmount,
    MaxWalletBalance,
    CooldownPeriod,
    BurnedTax,
    LiquidityTax,
    RecipientTax,
}

impl Getter {
    /// Order in which [`read_state`] calls the getters.
    pub const ORDER: [Getter; 15] = [
        Getter::Name,
        Getter::Symbol,
        Getter::TotalSupply,
        Getter::Owner,
        Getter::UniswapV2Pair,
        Getter::BuyTax,
        Getter::SellTax,
        Getter::TransferTax,
        Getter::TaxRecipient,
        Getter::MaxTransactionAmount,
        Getter::MaxWalletBalance,
        Getter::CooldownPeriod,
        Getter::BurnedTax,
        Getter::LiquidityTax,
        Getter::RecipientTax,
    ];

    pub fn function_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::TotalSupply => "totalSupply",
            Self::Owner => "owner",
            Self::UniswapV2Pair => "uniswapV2Pair",
            Self::BuyTax => "buyTax",
            Self::SellTax => "sellTax",
            Self::TransferTax => "transferTax",
            Self::TaxRecipient => "taxRecipient",
            Self::MaxTransactionAmount => "maxTransactionAmount",
            Self::MaxWalletBalance => "maxWalletBalance",
            Self::CooldownPeriod => "cooldownPeriod",
            Self::BurnedTax => "burnedTax",
            Self::LiquidityTax => "liquidityTax",
            Self::RecipientTax => "recipientTax",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Name | Self::Symbol => ValueKind::Text,
            Self::Owner | Self::UniswapV2Pair | Self::TaxRecipient => ValueKind::Account,
            _ => ValueKind::Amount,
        }
    }
}

impl fmt::Display for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Source of getter results.
#[allow(async_fn_in_trait)]
pub trait StateReader {
    async fn text(&self, getter: Getter) -> Result<String, ReportError>;
    async fn amount(&self, getter: Getter) -> Result<U256, ReportError>;
    async fn account(&self, getter: Getter) -> Result<Address, ReportError>;
}

impl<P: Provider<N>, N: Network> StateReader for IMeMeTokenInstance<P, N> {
    async fn text(&self, getter: Getter) -> Result<String, ReportError> {
        let result = match getter {
            Getter::Name => self.name().call().await,
            Getter::Symbol => self.symbol().call().await,
            _ => return Err(unexpected(getter, ValueKind::Text)),
        };
        result.map_err(|source| ReportError::Call { getter, source })
    }

    async fn amount(&self, getter: Getter) -> Result<U256, ReportError> {
        let result = match getter {
            Getter::TotalSupply => self.totalSupply().call().await,
            Getter::BuyTax => self.buyTax().call().await,
            Getter::SellTax => self.sellTax().call().await,
            Getter::TransferTax => self.transferTax().call().await,
            Getter::MaxTransactionAmount => self.maxTransactionAmount().call().await,
            Getter::MaxWalletBalance => self.maxWalletBalance().call().await,
            Getter::CooldownPeriod => self.cooldownPeriod().call().await,
            Getter::BurnedTax => self.burnedTax().call().await,
            Getter::LiquidityTax => self.liquidityTax().call().await,
            Getter::RecipientTax => self.recipientTax().call().await,
            _ => return Err(unexpected(getter, ValueKind::Amount)),
        };
        result.map_err(|source| ReportError::Call { getter, source })
    }

    async fn account(&self, getter: Getter) -> Result<Address, ReportError> {
        let result = match getter {
            Getter::Owner => self.owner().call().await,
            Getter::UniswapV2Pair => self.uniswapV2Pair().call().await,
            Getter::TaxRecipient => self.taxRecipient().call().await,
            _ => return Err(unexpected(getter, ValueKind::Account)),
        };
        result.map_err(|source| ReportError::Call { getter, source })
    }
}

fn unexpected(getter: Getter, expected: ValueKind) -> ReportError {
    ReportError::UnexpectedKind { getter, expected }
}

/// Values observed on a deployed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenState {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    pub owner: Address,
    pub uniswap_v2_pair: Address,

    pub buy_tax: U256,
    pub sell_tax: U256,
    pub transfer_tax: U256,
    pub tax_recipient: Address,

    pub max_transaction_amount: U256,
    pub max_wallet_balance: U256,
    pub cooldown_period: U256,

    pub burned_tax: U256,
    pub liquidity_tax: U256,
    pub recipient_tax: U256,
}

/// Calls every getter in [`Getter::ORDER`].
pub async fn read_state(reader: &impl StateReader) -> Result<TokenState, ReportError> {
    use Getter as G;
    // Fields are evaluated top to bottom, which fixes the call order.
    Ok(TokenState {
        name: reader.text(G::Name).await?,
        symbol: reader.text(G::Symbol).await?,
        total_supply: reader.amount(G::TotalSupply).await?,
        owner: reader.account(G::Owner).await?,
        uniswap_v2_pair: reader.account(G::UniswapV2Pair).await?,
        buy_tax: reader.amount(G::BuyTax).await?,
        sell_tax: reader.amount(G::SellTax).await?,
        transfer_tax: reader.amount(G::TransferTax).await?,
        tax_recipient: reader.account(G::TaxRecipient).await?,
        max_transaction_amount: reader.amount(G::MaxTransactionAmount).await?,
        max_wallet_balance: reader.amount(G::MaxWalletBalance).await?,
        cooldown_period: reader.amount(G::CooldownPeriod).await?,
        burned_tax: reader.amount(G::BurnedTax).await?,
        liquidity_tax: reader.amount(G::LiquidityTax).await?,
        recipient_tax: reader.amount(G::RecipientTax).await?,
    })
}
