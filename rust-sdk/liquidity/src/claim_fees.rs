use hogos_tx_sender::TransactionReceipt;
use hogos_unpair_client::claim_fees_call;
use tracing::info;

use crate::{LiquidityError, LiquidityManager, OperationKind};

impl LiquidityManager {
    /// Claims the trading fees accrued to the connected account's LP tokens.
    ///
    /// Sends `claimFees()` to the active pool's LP token, waits for the receipt and refreshes
    /// the position. The liquidity itself stays in the pool.
    ///
    /// # Errors
    ///
    /// * `NotConnected` - No wallet session.
    /// * `OperationInProgress` - A previous claim is still waiting for its receipt.
    /// * `UserRejected` - The user declined the transaction in the wallet.
    /// * `ContractCallFailed` - The wallet failed to submit the call or the transaction reverted.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use hogos_tx_sender::{HttpProvider, WalletProvider};
    /// use hogos_unpair::{LiquidityManager, NotificationBoard};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let wallet: Arc<dyn WalletProvider> =
    ///         Arc::new(HttpProvider::new("http://127.0.0.1:1248").unwrap());
    ///     let manager = LiquidityManager::new(Some(wallet), Arc::new(NotificationBoard::new()));
    ///     manager.connect().await.unwrap();
    ///     let receipt = manager.claim_fees().await.unwrap();
    ///     println!("Fees claimed in {}", receipt.transaction_hash);
    /// }
    /// ```
    pub async fn claim_fees(&self) -> Result<TransactionReceipt, LiquidityError> {
        let kind = OperationKind::ClaimFees;
        let signer = self
            .require_signer()
            .map_err(|err| self.report_precondition(kind, err))?;
        let pool = self.active_pool();
        self.begin(kind)?;

        info!(%pool, account = %signer.address(), "claiming fees");
        let result = self
            .submit(kind, &signer, &claim_fees_call(pool), "Claiming fees...")
            .await;
        let receipt = self.finish(kind, result, "Fees claimed successfully!")?;

        self.refresh_quietly(pool).await;
        Ok(receipt)
    }
}
