//! Capabilities the account menu consumes but does not own.

use async_trait::async_trait;
use color_eyre::eyre::Result;

use super::presence::PresenceStore;

/// Handle for an active wallet connection.
pub trait Session: Send + Sync {
    /// Invalidate the session.
    fn sign_user_out(&self) -> Result<()>;
}

/// Source of the active account's address.
pub trait AddressProvider {
    fn current_address(&self) -> Option<String>;
}

/// Resolves on-chain names (BNS) owned by an address.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Candidate names for `address`, preferred first. May be empty.
    async fn names(&self, address: &str) -> Result<Vec<String>>;
}

/// Looks up the HEY balance of an address.
#[async_trait]
pub trait BalanceService: Send + Sync {
    /// Raw token amount, or `None` if the address holds no entry for the token.
    async fn balance(&self, address: &str) -> Result<Option<u128>>;
}

/// Reads the current address from the presence signal.
impl AddressProvider for PresenceStore {
    fn current_address(&self) -> Option<String> {
        self.current().map(|user| user.address)
    }
}
