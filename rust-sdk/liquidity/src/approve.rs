use hogos_tx_sender::TransactionReceipt;
use hogos_unpair_client::approve_router_call;
use tracing::info;

use crate::{LiquidityError, LiquidityManager, OperationKind};

impl LiquidityManager {
    /// Approves the router to spend the connected account's LP tokens.
    ///
    /// The allowance is exactly the balance last read for the active pool, never an unlimited
    /// amount. Refresh the position first if the balance may have changed since.
    ///
    /// # Errors
    ///
    /// * `NotConnected` - No wallet session.
    /// * `NoLiquidity` - The balance is unknown or zero.
    /// * `OperationInProgress` - A previous approval is still waiting for its receipt.
    /// * `UserRejected` / `ContractCallFailed` - The wallet or the chain refused the approval.
    pub async fn approve(&self) -> Result<TransactionReceipt, LiquidityError> {
        let kind = OperationKind::Approve;
        let signer = self
            .require_signer()
            .map_err(|err| self.report_precondition(kind, err))?;
        let pool = self.active_pool();
        let balance = self
            .require_balance(pool)
            .map_err(|err| self.report_precondition(kind, err))?;
        self.begin(kind)?;

        info!(%pool, %balance, "approving router");
        let result = self
            .submit(
                kind,
                &signer,
                &approve_router_call(pool, balance),
                "Approving LP tokens...",
            )
            .await;
        self.finish(kind, result, "LP tokens approved successfully!")
    }
}
