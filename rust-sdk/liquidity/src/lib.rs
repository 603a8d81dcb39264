mod approve;
mod claim_fees;
mod config;
mod error;
mod manager;
mod notify;
mod operation;
mod position;
mod remove_liquidity;
mod session;

#[cfg(test)]
mod tests;

pub use config::*;
pub use error::*;
pub use manager::*;
pub use notify::*;
pub use operation::*;
pub use position::*;
pub use session::*;
