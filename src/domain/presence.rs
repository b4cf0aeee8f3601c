//! The user-presence signal.
//!
//! A single observable value shared by every part of the UI that needs to know
//! whether a wallet is connected. Handles are cheap to clone and are passed
//! explicitly to whoever needs them. Only the wallet-connect path writes a user
//! (`connect`) and only the sign-out path clears it (`clear`).

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::user::User;

#[derive(Debug, Clone)]
pub struct PresenceStore {
    tx: Arc<watch::Sender<Option<User>>>,
}

impl Default for PresenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceStore {
    /// Create a store with no user present.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current value.
    pub fn current(&self) -> Option<User> {
        self.tx.borrow().clone()
    }

    pub fn is_present(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Subscribe to changes of the presence value.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.tx.subscribe()
    }

    /// Record a successful wallet connection.
    pub fn connect(&self, user: User) {
        debug!("Presence set for {}", user.address);
        self.tx.send_replace(Some(user));
    }

    /// Clear the presence value after a sign-out.
    pub fn clear(&self) {
        debug!("Presence cleared");
        self.tx.send_replace(None);
    }
}
