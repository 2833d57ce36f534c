// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Bindings for the public getters of a deployed MeMeToken.

use alloy::{
    network::Network,
    primitives::Address,
    providers::Provider,
    sol,
};

sol! {
    #[sol(rpc)]
    interface IMeMeToken {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function owner() external view returns (address);
        function uniswapV2Pair() external view returns (address);

        function buyTax() external view returns (uint256);
        function sellTax() external view returns (uint256);
        function transferTax() external view returns (uint256);
        function taxRecipient() external view returns (address);

        function maxTransactionAmount() external view returns (uint256);
        function maxWalletBalance() external view returns (uint256);
        function cooldownPeriod() external view returns (uint256);

        function burnedTax() external view returns (uint256);
        function liquidityTax() external view returns (uint256);
        function recipientTax() external view returns (uint256);
    }
}

pub fn meme_token<P: Provider<N>, N: Network>(
    address: Address,
    provider: P,
) -> IMeMeToken::IMeMeTokenInstance<P, N> {
    IMeMeToken::new(address, provider)
}
