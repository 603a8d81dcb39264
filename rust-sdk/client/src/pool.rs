use std::{fmt, str::FromStr};

use alloy_primitives::Address;

use crate::{ClientError, GHOG, GHOG_OS_LP, HOG, HOG_OS_LP, OS};

/// The LP tokens the SDK can unpair.
///
/// Both pools are stable pools on Router V2 with OS as token B.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LpPool {
    #[default]
    HogOs,
    GhogOs,
}

impl LpPool {
    pub const ALL: [LpPool; 2] = [LpPool::HogOs, LpPool::GhogOs];

    pub fn lp_token(&self) -> Address {
        match self {
            Self::HogOs => HOG_OS_LP,
            Self::GhogOs => GHOG_OS_LP,
        }
    }

    pub fn token_a(&self) -> Address {
        match self {
            Self::HogOs => HOG,
            Self::GhogOs => GHOG,
        }
    }

    pub fn token_b(&self) -> Address {
        OS
    }

    pub fn stable(&self) -> bool {
        true
    }

    pub fn symbol_a(&self) -> &'static str {
        match self {
            Self::HogOs => "HOG",
            Self::GhogOs => "GHOG",
        }
    }

    pub fn symbol_b(&self) -> &'static str {
        "OS"
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HogOs => "hog-os",
            Self::GhogOs => "ghog-os",
        }
    }
}

impl fmt::Display for LpPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.symbol_a(), self.symbol_b())
    }
}

impl FromStr for LpPool {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hog-os" | "hog_os" | "hogos" => Ok(Self::HogOs),
            "ghog-os" | "ghog_os" | "ghogos" => Ok(Self::GhogOs),
            _ => Err(ClientError::UnknownPool(s.to_string())),
        }
    }
}
