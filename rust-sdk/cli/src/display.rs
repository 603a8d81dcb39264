use colored::Colorize;
use hogos_tx_sender::TransactionReceipt;
use hogos_unpair::{LiquidityManager, LiquidityPosition, OperationKind, OperationState, WalletSession};
use hogos_unpair_client::{format_chain_id, LpPool, TOKEN_DECIMALS};
use hogos_unpair_core::{format_token_amount, SlippageConfig};

pub fn print_banner() {
    println!(
        "\n\
        ==========================\n\
        🐗 HOG/OS LP Unpair\n\
        ==========================\n"
    );
}

pub fn print_status(manager: &LiquidityManager) {
    let pool = manager.active_pool();
    println!("{}", format_session(&manager.session()));
    println!("{}", format_slippage(&manager.slippage()));
    println!("{}", format_position(pool, &manager.position(pool)));

    let operations = manager
        .exposed_operations()
        .into_iter()
        .map(|kind| {
            let label = kind.to_string();
            if manager.is_enabled(kind) {
                label.green().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    println!("Available actions: {operations}");
    println!("-------------------------------------\n");
}

pub fn print_outcome(kind: OperationKind, state: &OperationState, receipt: &TransactionReceipt) {
    if matches!(state, OperationState::Succeeded) {
        println!(
            "{} {} confirmed in block {}: {}",
            "✔".green().bold(),
            kind,
            receipt
                .block_number
                .map(|block| block.to_string())
                .unwrap_or_else(|| "?".to_string()),
            receipt.transaction_hash
        );
    }
}

fn format_session(session: &WalletSession) -> String {
    match (session.connected, session.account) {
        (true, Some(account)) => format!(
            "Wallet: {}\n  Network: {}",
            account,
            session
                .chain_id
                .map(format_chain_id)
                .unwrap_or_else(|| "unknown".to_string())
        ),
        _ => match &session.last_error {
            Some(error) => format!("Wallet: not connected ({error})"),
            None => "Wallet: not connected".to_string(),
        },
    }
}

fn format_slippage(slippage: &SlippageConfig) -> String {
    let mode = if slippage.is_custom() { "custom" } else { "preset" };
    format!("Slippage: {}% ({mode})", slippage.selected_percent())
}

fn format_position(pool: LpPool, position: &LiquidityPosition) -> String {
    let balance = match position.balance {
        Some(balance) => format_token_amount(balance, TOKEN_DECIMALS),
        None => "unknown".to_string(),
    };
    let mut lines = vec![format!("Pool: {pool}"), format!("  LP balance: {balance}")];
    if let Some(quote) = position.quote {
        lines.push(format!(
            "  Expected {}: {} (min {})",
            pool.symbol_a(),
            format_token_amount(quote.amount_a, TOKEN_DECIMALS),
            format_token_amount(quote.min_amount_a, TOKEN_DECIMALS)
        ));
        lines.push(format!(
            "  Expected {}: {} (min {})",
            pool.symbol_b(),
            format_token_amount(quote.amount_b, TOKEN_DECIMALS),
            format_token_amount(quote.min_amount_b, TOKEN_DECIMALS)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use hogos_unpair_core::remove_liquidity_quote;

    const ONE: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_format_position_with_quote() {
        let position = LiquidityPosition {
            balance: Some(U256::from(ONE)),
            quote: Some(remove_liquidity_quote(
                U256::from(2 * ONE),
                U256::from(ONE),
                10.0,
            )),
        };
        assert_eq!(
            format_position(LpPool::HogOs, &position),
            "Pool: HOG-OS\n  \
             LP balance: 1.000000\n  \
             Expected HOG: 2.000000 (min 1.800000)\n  \
             Expected OS: 1.000000 (min 0.900000)"
        );
    }

    #[test]
    fn test_format_unknown_position() {
        assert_eq!(
            format_position(LpPool::GhogOs, &LiquidityPosition::default()),
            "Pool: GHOG-OS\n  LP balance: unknown"
        );
    }

    #[test]
    fn test_format_disconnected_session() {
        let session = WalletSession {
            last_error: Some("User rejected the request.".to_string()),
            ..WalletSession::default()
        };
        assert_eq!(
            format_session(&session),
            "Wallet: not connected (User rejected the request.)"
        );
    }

    #[test]
    fn test_format_slippage() {
        assert_eq!(
            format_slippage(&SlippageConfig::default()),
            "Slippage: 10% (preset)"
        );
    }
}
