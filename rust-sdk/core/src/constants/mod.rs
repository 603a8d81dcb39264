mod error;
mod slippage;
mod time;

pub use error::*;
pub use slippage::*;
pub use time::*;
