mod cli;
mod display;

use std::{error::Error, process::ExitCode, sync::Arc};

use clap::Parser;
use cli::{Args, Command};
use colored::Colorize;
use display::{print_banner, print_outcome, print_status};
use hogos_tx_sender::{HttpProvider, WalletProvider};
use hogos_unpair::{
    set_remove_liquidity_deadline_minutes, LiquidityManager, NotificationBoard, OperationKind,
};
use hogos_unpair_core::SLIPPAGE_OPTIONS;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    set_remove_liquidity_deadline_minutes(args.deadline_minutes)?;

    let wallet: Arc<dyn WalletProvider> = Arc::new(HttpProvider::new(&args.wallet_url)?);
    let manager = LiquidityManager::new(Some(wallet), Arc::new(NotificationBoard::new()));
    manager.select_pool(args.pool);
    if let Some(slippage) = args.slippage.as_deref() {
        apply_slippage(&manager, slippage)?;
    }

    print_banner();
    println!("Configuration:");
    println!(
        "  Wallet: {}\n  Pool: {}\n  Deadline: {} minutes\n",
        args.wallet_url, args.pool, args.deadline_minutes
    );

    let account = manager.connect().await?;
    info!(%account, "connected");
    print_status(&manager);

    let kinds: &[OperationKind] = match args.command {
        Command::Status => &[],
        Command::ClaimFees => &[OperationKind::ClaimFees],
        Command::Approve => &[OperationKind::Approve],
        Command::RemoveLiquidity => &[OperationKind::RemoveLiquidity],
        Command::Unpair => &[OperationKind::Approve, OperationKind::RemoveLiquidity],
    };
    if kinds.is_empty() {
        return Ok(());
    }

    for kind in kinds {
        let receipt = match kind {
            OperationKind::ClaimFees => manager.claim_fees().await?,
            OperationKind::Approve => manager.approve().await?,
            OperationKind::RemoveLiquidity => manager.remove_liquidity().await?,
        };
        print_outcome(*kind, &manager.operation_state(*kind), &receipt);
    }

    print_status(&manager);
    Ok(())
}

/// Presets are selected as presets, anything else goes through the custom field.
fn apply_slippage(manager: &LiquidityManager, slippage: &str) -> Result<(), Box<dyn Error>> {
    let preset = slippage
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|percent| SLIPPAGE_OPTIONS.contains(percent));
    match preset {
        Some(percent) => manager.set_slippage_preset(percent)?,
        None => {
            manager.set_custom_slippage(slippage)?;
        }
    }
    Ok(())
}
