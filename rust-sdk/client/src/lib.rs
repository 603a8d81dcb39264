#[rustfmt::skip]
mod abi;

mod addresses;
mod calls;
mod error;
mod network;
mod pool;

pub use abi::*;
pub use addresses::*;
pub use calls::*;
pub use error::*;
pub use network::*;
pub use pool::*;
