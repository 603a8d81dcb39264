mod deadline;
mod format;
mod slippage;

pub use deadline::*;
pub use format::*;
pub use slippage::*;
