mod quote;
mod slippage;

pub use quote::*;
pub use slippage::*;
