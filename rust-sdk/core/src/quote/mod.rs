mod remove_liquidity;

pub use remove_liquidity::*;
