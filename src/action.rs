use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::user::User;

/// Actions that can be triggered by user input or internal events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Tick,
    Resize(u16, u16),
    Suspend,
    Quit,
    ClearScreen,
    Error(String),

    // Wallet connection
    WalletConnected(User),
    SignOut,

    // Account data
    LoadAccount(String),
    NamesLoaded {
        address: String,
        result: Result<Vec<String>, String>,
    },
    BalanceLoaded {
        address: String,
        result: Result<Option<u128>, String>,
    },
}
