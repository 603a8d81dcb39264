use serde::Serialize;

use crate::ClientError;

/// Chain id of the Sonic network.
pub const SONIC_CHAIN_ID: u64 = 146;

/// Chain id of the Sonic network as the hex string wallets exchange.
pub const SONIC_HEX_CHAIN_ID: &str = "0x92";

pub const SONIC_CHAIN_NAME: &str = "Sonic Network";
pub const SONIC_RPC_URL: &str = "https://rpc.soniclabs.com";
pub const SONIC_EXPLORER_URL: &str = "https://sonicscan.org/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Parameters of `wallet_addEthereumChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

/// Parameters of `wallet_switchEthereumChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchChainParams {
    pub chain_id: String,
}

pub fn sonic_network_params() -> AddChainParams {
    AddChainParams {
        chain_id: SONIC_HEX_CHAIN_ID.to_string(),
        chain_name: SONIC_CHAIN_NAME.to_string(),
        native_currency: NativeCurrency {
            name: "Sonic".to_string(),
            symbol: "S".to_string(),
            decimals: 18,
        },
        rpc_urls: vec![SONIC_RPC_URL.to_string()],
        block_explorer_urls: vec![SONIC_EXPLORER_URL.to_string()],
    }
}

pub fn sonic_switch_params() -> SwitchChainParams {
    SwitchChainParams {
        chain_id: SONIC_HEX_CHAIN_ID.to_string(),
    }
}

/// Parse a chain id as returned by `eth_chainId` (`0x`-prefixed hex) or in decimal.
pub fn parse_chain_id(value: &str) -> Result<u64, ClientError> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| ClientError::InvalidChainId(value.to_string()))
}

pub fn format_chain_id(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}
