use std::time::Duration;

use hogos_tx_sender::TransactionReceipt;
use hogos_unpair_client::{remove_liquidity_call, RemoveLiquidityArgs};
use hogos_unpair_core::deadline;
use tokio::time::sleep;
use tracing::info;

use crate::{config, LiquidityError, LiquidityManager, OperationKind};

impl LiquidityManager {
    /// Removes the connected account's whole LP balance from the active pool.
    ///
    /// Both underlying tokens are sent back to the account. The transaction carries the
    /// minimum amounts of the current quote at the selected slippage and a deadline computed
    /// right before submission. The router must have been approved for the balance.
    ///
    /// Once confirmed the cached position is cleared and re-read after the refresh delay.
    ///
    /// # Errors
    ///
    /// * `NotConnected` - No wallet session.
    /// * `NoLiquidity` - The balance is unknown or zero.
    /// * `QuoteUnavailable` - The removal quote has not been read yet.
    /// * `OperationInProgress` - A previous removal is still waiting for its receipt.
    /// * `UserRejected` / `ContractCallFailed` - The wallet or the chain refused the removal,
    ///   e.g. because the pool moved past the minimum amounts.
    pub async fn remove_liquidity(&self) -> Result<TransactionReceipt, LiquidityError> {
        let kind = OperationKind::RemoveLiquidity;
        let signer = self
            .require_signer()
            .map_err(|err| self.report_precondition(kind, err))?;
        let pool = self.active_pool();
        let balance = self
            .require_balance(pool)
            .map_err(|err| self.report_precondition(kind, err))?;
        let quote = self
            .position(pool)
            .quote
            .ok_or(LiquidityError::QuoteUnavailable)
            .map_err(|err| self.report_precondition(kind, err))?;
        self.begin(kind)?;

        let args = RemoveLiquidityArgs {
            liquidity: balance,
            amount_a_min: quote.min_amount_a,
            amount_b_min: quote.min_amount_b,
            to: signer.address(),
            deadline: deadline(config::deadline_minutes()),
        };
        info!(
            %pool,
            liquidity = %args.liquidity,
            amount_a_min = %args.amount_a_min,
            amount_b_min = %args.amount_b_min,
            deadline = args.deadline,
            "removing liquidity"
        );
        let result = self
            .submit(
                kind,
                &signer,
                &remove_liquidity_call(pool, &args),
                "Removing liquidity...",
            )
            .await;
        let receipt = self.finish(kind, result, "Liquidity removed successfully!")?;

        self.clear_position(pool);
        sleep(Duration::from_millis(config::refresh_delay_ms())).await;
        self.refresh_quietly(pool).await;
        Ok(receipt)
    }
}
