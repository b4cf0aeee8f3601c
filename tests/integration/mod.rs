//! Integration tests for hey-account.
//!
//! Exercises the library surface the UI is built on: the presence signal,
//! the stored session and the display rules, with in-memory collaborators
//! standing in for the Stacks API.

pub mod e2e_connect_flow;
pub mod e2e_display;

use std::sync::Mutex;

use async_trait::async_trait;
use color_eyre::eyre::{Result, eyre};
use hey_account::domain::collaborators::{BalanceService, NameResolver};

pub const ADDRESS: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";

/// Name resolver answering from a fixed table.
pub struct StaticNames {
    pub names: Vec<String>,
}

#[async_trait]
impl NameResolver for StaticNames {
    async fn names(&self, _address: &str) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

/// Balance service that records the addresses it was asked about.
pub struct RecordingBalances {
    pub amount: Option<u128>,
    pub fail: bool,
    pub requests: Mutex<Vec<String>>,
}

impl RecordingBalances {
    pub fn new(amount: Option<u128>) -> Self {
        Self {
            amount,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BalanceService for RecordingBalances {
    async fn balance(&self, address: &str) -> Result<Option<u128>> {
        self.requests.lock().unwrap().push(address.to_string());
        if self.fail {
            Err(eyre!("503 Service Unavailable"))
        } else {
            Ok(self.amount)
        }
    }
}
