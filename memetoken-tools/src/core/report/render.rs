// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::{self, Write};

use super::TokenState;

/// Writes the observed token state as human-readable sections.
pub fn write_state(out: &mut impl Write, state: &TokenState) -> io::Result<()> {
    writeln!(out, "Token Name: {}", state.name)?;
    writeln!(out, "Token Symbol: {}", state.symbol)?;
    writeln!(out, "Total Supply: {}", state.total_supply)?;
    writeln!(out, "Contract Owner: {}", state.owner)?;
    writeln!(out, "Uniswap V2 Pair: {}", state.uniswap_v2_pair)?;

    writeln!(out, "\nTax Settings:")?;
    writeln!(out, "Buy Tax: {}%", state.buy_tax)?;
    writeln!(out, "Sell Tax: {}%", state.sell_tax)?;
    writeln!(out, "Transfer Tax: {}%", state.transfer_tax)?;
    writeln!(out, "Tax Recipient: {}", state.tax_recipient)?;

    writeln!(out, "\nTransaction Limits:")?;
    writeln!(out, "Max Transaction Amount: {}", state.max_transaction_amount)?;
    writeln!(out, "Max Wallet Balance: {}", state.max_wallet_balance)?;
    writeln!(out, "Cooldown Period: {} seconds", state.cooldown_period)?;

    writeln!(out, "\nTax Distribution:")?;
    writeln!(out, "Burned Tax Share: {}%", state.burned_tax)?;
    writeln!(out, "Liquidity Tax Share: {}%", state.liquidity_tax)?;
    writeln!(out, "Recipient Tax Share: {}%", state.recipient_tax)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::report::tests::{sample_state, OWNER, PAIR};

    #[test]
    fn renders_all_sections() {
        let mut out = Vec::new();
        write_state(&mut out, &sample_state()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "Token Name: myMeMeToken
Token Symbol: MMTK
Total Supply: 90000000000000000000000000
Contract Owner: {OWNER}
Uniswap V2 Pair: {PAIR}

Tax Settings:
Buy Tax: 5%
Sell Tax: 5%
Transfer Tax: 1%
Tax Recipient: {OWNER}

Transaction Limits:
Max Transaction Amount: 900000
Max Wallet Balance: 1800000
Cooldown Period: 30 seconds

Tax Distribution:
Burned Tax Share: 20%
Liquidity Tax Share: 30%
Recipient Tax Share: 50%
"
        );
        assert_eq!(text, expected);
    }
}
