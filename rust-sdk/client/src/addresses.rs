use alloy_primitives::{address, Address};

/// The HOG token.
pub const HOG: Address = address!("B3804bF38bD170ef65b4De8536d19a8e3600C0A9");

/// The GHOG token.
pub const GHOG: Address = address!("0e899dA2aD0817ed850ce68f7f489688E4D42D9D");

/// The OS token, quote side of both pools.
pub const OS: Address = address!("b1e25689D55734FD3ffFc939c4C3Eb52DFf8A794");

/// LP token of the stable HOG/OS pool.
pub const HOG_OS_LP: Address = address!("784DD93F3c42DCbF88D45E6ad6D3CC20dA169a60");

/// LP token of the stable GHOG/OS pool.
pub const GHOG_OS_LP: Address = address!("D1CB1622a50506F0fDdf329CB857a0935C7FbbF9");

/// Router V2, spender of LP tokens and entry point for removing liquidity.
pub const ROUTER_V2: Address = address!("F5F7231073b3B41c04BA655e1a7438b1a7b29c27");

/// Decimals shared by every token above.
pub const TOKEN_DECIMALS: u8 = 18;
