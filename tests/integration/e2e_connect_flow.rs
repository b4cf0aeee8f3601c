//! Connect, restart and sign out against a real LMDB session store.

use hey_account::{
    domain::{collaborators::Session, presence::PresenceStore, user::User},
    infra::store::SessionStore,
};
use tempfile::TempDir;

use super::ADDRESS;

fn create_temp_store() -> (SessionStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SessionStore::open(temp_dir.path(), "testnet").expect("Failed to create store");
    (store, temp_dir)
}

#[test]
fn test_connect_persists_and_sign_out_clears() {
    let (store, _temp_dir) = create_temp_store();
    let presence = PresenceStore::new();

    // Connect
    let user = User::new(ADDRESS, Some("bob")).unwrap();
    store.save_user(&user).unwrap();
    presence.connect(user.clone());
    assert_eq!(presence.current(), Some(user.clone()));

    // Simulated restart: a fresh presence store picks the session back up
    let restarted = PresenceStore::new();
    if let Some(stored) = store.load_user().unwrap() {
        restarted.connect(stored);
    }
    assert_eq!(restarted.current(), Some(user));

    // Sign out: invalidate the session, then clear presence
    store.sign_user_out().unwrap();
    restarted.clear();
    assert!(!restarted.is_present());
    assert_eq!(store.load_user().unwrap(), None);
}

#[test]
fn test_networks_have_separate_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let testnet = SessionStore::open(temp_dir.path(), "testnet").unwrap();
    let mainnet = SessionStore::open(temp_dir.path(), "mainnet").unwrap();

    testnet
        .save_user(&User::new(ADDRESS, None).unwrap())
        .unwrap();

    assert!(testnet.load_user().unwrap().is_some());
    assert!(mainnet.load_user().unwrap().is_none());
}

#[tokio::test]
async fn test_subscribers_follow_connect_and_sign_out() {
    let presence = PresenceStore::new();
    let mut rx = presence.subscribe();

    let writer = presence.clone();
    let handle = tokio::spawn(async move {
        writer.connect(User::new(ADDRESS, None).unwrap());
        writer.clear();
    });
    handle.await.unwrap();

    // The receiver only keeps the latest value
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), None);
}
