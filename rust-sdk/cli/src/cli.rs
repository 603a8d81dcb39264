use clap::{Parser, Subcommand};
use hogos_unpair_client::LpPool;

/// Frame's local EIP-1193 endpoint.
pub const DEFAULT_WALLET_URL: &str = "http://127.0.0.1:1248";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        short = 'w',
        long,
        env = "HOGOS_WALLET_URL",
        default_value = DEFAULT_WALLET_URL,
        help = "JSON-RPC endpoint of the wallet that signs transactions (Frame, or a node with unlocked accounts).\n"
    )]
    pub wallet_url: String,

    #[arg(
        short = 'p',
        long,
        env = "HOGOS_POOL",
        default_value = "hog-os",
        help = "The liquidity pool to act on. Options:\n  \
                - `hog-os`: HOG/OS stable pool\n  \
                - `ghog-os`: GHOG/OS stable pool\n"
    )]
    pub pool: LpPool,

    #[arg(
        short = 's',
        long,
        env = "HOGOS_SLIPPAGE",
        help = "Slippage tolerance in percent. Presets are 0.5, 1, 2, 5 and 10 (default), any other value in (0, 100] is used as a custom tolerance.\n"
    )]
    pub slippage: Option<String>,

    #[arg(
        short = 'd',
        long,
        env = "HOGOS_DEADLINE_MINUTES",
        default_value_t = 10,
        help = "Minutes a remove liquidity transaction stays valid after submission.\n"
    )]
    pub deadline_minutes: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the wallet session, the LP position and the available actions.
    Status,
    /// Claim the trading fees accrued to the LP tokens.
    ClaimFees,
    /// Approve the router to spend the whole LP balance.
    Approve,
    /// Remove the whole LP balance into the two underlying tokens.
    RemoveLiquidity,
    /// Approve, then remove liquidity.
    Unpair,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hogos-unpair", "status"]).unwrap();
        assert_eq!(args.wallet_url, DEFAULT_WALLET_URL);
        assert_eq!(args.pool, LpPool::HogOs);
        assert_eq!(args.slippage, None);
        assert_eq!(args.deadline_minutes, 10);
        assert_eq!(args.command, Command::Status);
    }

    #[rstest]
    #[case("claim-fees", Command::ClaimFees)]
    #[case("approve", Command::Approve)]
    #[case("remove-liquidity", Command::RemoveLiquidity)]
    #[case("unpair", Command::Unpair)]
    fn test_commands(#[case] name: &str, #[case] expected: Command) {
        let args = Args::try_parse_from(["hogos-unpair", name]).unwrap();
        assert_eq!(args.command, expected);
    }

    #[test]
    fn test_pool_and_slippage() {
        let args = Args::try_parse_from([
            "hogos-unpair",
            "--pool",
            "ghog-os",
            "--slippage",
            "2",
            "remove-liquidity",
        ])
        .unwrap();
        assert_eq!(args.pool, LpPool::GhogOs);
        assert_eq!(args.slippage.as_deref(), Some("2"));
    }

    #[test]
    fn test_unknown_pool() {
        assert!(Args::try_parse_from(["hogos-unpair", "--pool", "hog-eth", "status"]).is_err());
    }
}
