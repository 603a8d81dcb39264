use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Slippage input must be a number between 0 and 100: {0}")]
    InvalidSlippageInput(String),

    #[error("Slippage must be greater than 0 and at most 100: {0}")]
    SlippageOutOfRange(String),
}
