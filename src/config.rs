use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    if let Ok(s) = std::env::var("HEY_ACCOUNT_DATA") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("network", "hey", "hey-account") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    /// Base URL of a Stacks blockchain API instance.
    pub api_url: String,
}

/// The fungible token whose balance is shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Contract principal, `<address>.<contract-name>`.
    pub contract: String,
    /// Asset name declared by `define-fungible-token`.
    pub asset: String,
    pub symbol: String,
}

impl TokenConfig {
    /// Key used by the balances endpoint, `<contract>::<asset>`.
    pub fn asset_identifier(&self) -> String {
        format!("{}::{}", self.contract, self.asset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub token: TokenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl Config {
    /// Create config from CLI args.
    pub fn new(network: &str, api_url: Option<&str>, token_contract: Option<&str>) -> Self {
        let mut config = Self::from_network(network);
        if let Some(url) = api_url {
            config.network.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(contract) = token_contract {
            config.token.contract = contract.to_string();
        }
        config
    }

    pub fn mainnet() -> Self {
        Self {
            network: NetworkConfig {
                name: "mainnet".to_string(),
                api_url: "https://api.hiro.so".to_string(),
            },
            token: TokenConfig {
                contract: "SPAXYA5XS51713FDTQ8H94EJ4V579CXMTRNBZKSF.hey-token".to_string(),
                asset: "hey-token".to_string(),
                symbol: "HEY".to_string(),
            },
        }
    }

    pub fn testnet() -> Self {
        Self {
            network: NetworkConfig {
                name: "testnet".to_string(),
                api_url: "https://api.testnet.hiro.so".to_string(),
            },
            token: TokenConfig {
                contract: "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.hey-token".to_string(),
                asset: "hey-token".to_string(),
                symbol: "HEY".to_string(),
            },
        }
    }

    pub fn from_network(network: &str) -> Self {
        match network {
            "testnet" => Self::testnet(),
            _ => Self::mainnet(),
        }
    }
}
