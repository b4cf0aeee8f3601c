use std::collections::HashMap;

use async_trait::async_trait;
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::{Config, TokenConfig},
    domain::collaborators::{BalanceService, NameResolver},
};

/// Stacks blockchain API client.
pub struct StacksApi {
    client: reqwest::Client,
    api_url: String,
    token: TokenConfig,
}

#[derive(Debug, Deserialize)]
struct NamesResponse {
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BalancesResponse {
    #[serde(default)]
    fungible_tokens: HashMap<String, TokenBalance>,
}

#[derive(Debug, Deserialize)]
struct TokenBalance {
    /// Decimal string; amounts can exceed u64.
    balance: String,
}

impl StacksApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.network.api_url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl NameResolver for StacksApi {
    async fn names(&self, address: &str) -> Result<Vec<String>> {
        let url = format!("{}/v1/addresses/stacks/{}", self.api_url, address);
        debug!("Resolving names: {}", url);
        let response: NamesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.names)
    }
}

#[async_trait]
impl BalanceService for StacksApi {
    async fn balance(&self, address: &str) -> Result<Option<u128>> {
        let url = format!("{}/extended/v1/address/{}/balances", self.api_url, address);
        debug!("Fetching balances: {}", url);
        let response: BalancesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        token_amount(&response, &self.token.asset_identifier())
    }
}

fn token_amount(response: &BalancesResponse, asset_identifier: &str) -> Result<Option<u128>> {
    response
        .fungible_tokens
        .get(asset_identifier)
        .map(|entry| {
            entry
                .balance
                .parse::<u128>()
                .wrap_err_with(|| format!("Invalid balance '{}'", entry.balance))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: &str = "SPAXYA5XS51713FDTQ8H94EJ4V579CXMTRNBZKSF.hey-token::hey-token";

    #[test]
    fn test_token_amount_present() {
        let json = format!(
            r#"{{"stx": {{"balance": "10"}}, "fungible_tokens": {{"{ASSET}": {{"balance": "42", "total_sent": "0"}}}}}}"#
        );
        let response: BalancesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(token_amount(&response, ASSET).unwrap(), Some(42));
    }

    #[test]
    fn test_token_amount_missing() {
        let response: BalancesResponse =
            serde_json::from_str(r#"{"fungible_tokens": {}}"#).unwrap();
        assert_eq!(token_amount(&response, ASSET).unwrap(), None);

        let response: BalancesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(token_amount(&response, ASSET).unwrap(), None);
    }

    #[test]
    fn test_token_amount_invalid() {
        let json = format!(r#"{{"fungible_tokens": {{"{ASSET}": {{"balance": "lots"}}}}}}"#);
        let response: BalancesResponse = serde_json::from_str(&json).unwrap();
        assert!(token_amount(&response, ASSET).is_err());
    }

    #[test]
    fn test_names_response_defaults_to_empty() {
        let response: NamesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.names.is_empty());

        let response: NamesResponse =
            serde_json::from_str(r#"{"names": ["alice.btc"]}"#).unwrap();
        assert_eq!(response.names, vec!["alice.btc".to_string()]);
    }
}
