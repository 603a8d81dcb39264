use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to decode {function} return data: {source}")]
    Decode {
        function: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },

    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("Unknown pool: {0}")]
    UnknownPool(String),
}
