use std::fmt;

use crate::LiquidityError;

/// The on-chain actions a user can trigger on a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKind {
    ClaimFees,
    Approve,
    RemoveLiquidity,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::ClaimFees,
        OperationKind::Approve,
        OperationKind::RemoveLiquidity,
    ];

    /// Key of the notification slot that reports this operation.
    pub fn notification_key(&self) -> &'static str {
        match self {
            OperationKind::ClaimFees => "claim-fees",
            OperationKind::Approve => "approve",
            OperationKind::RemoveLiquidity => "remove-liquidity",
        }
    }

    fn index(&self) -> usize {
        match self {
            OperationKind::ClaimFees => 0,
            OperationKind::Approve => 1,
            OperationKind::RemoveLiquidity => 2,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationKind::ClaimFees => "Claim fees",
            OperationKind::Approve => "Approve",
            OperationKind::RemoveLiquidity => "Remove liquidity",
        };
        f.write_str(label)
    }
}

/// Lifecycle of a single operation kind.
///
/// `Succeeded` and `Failed` only describe the last attempt; a new attempt may start from
/// either of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl OperationState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OperationState::InFlight)
    }
}

/// Operation state of every kind, at most one attempt in flight per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStates {
    states: [OperationState; 3],
}

impl OperationStates {
    pub fn get(&self, kind: OperationKind) -> &OperationState {
        &self.states[kind.index()]
    }

    pub fn is_in_flight(&self, kind: OperationKind) -> bool {
        self.get(kind).is_in_flight()
    }

    pub(crate) fn begin(&mut self, kind: OperationKind) -> Result<(), LiquidityError> {
        let state = &mut self.states[kind.index()];
        if state.is_in_flight() {
            return Err(LiquidityError::OperationInProgress(kind));
        }
        *state = OperationState::InFlight;
        Ok(())
    }

    pub(crate) fn finish<T>(&mut self, kind: OperationKind, result: &Result<T, LiquidityError>) {
        self.states[kind.index()] = match result {
            Ok(_) => OperationState::Succeeded,
            Err(err) => OperationState::Failed(err.to_string()),
        };
    }
}
