//! What the menu would show for a given set of collaborator answers.

use hey_account::domain::{
    collaborators::{BalanceService, NameResolver},
    display::{account_name, balance_label},
    fetch::Fetch,
};

use super::{ADDRESS, RecordingBalances, StaticNames};

async fn shown_name(resolver: &dyn NameResolver, username: Option<&str>) -> String {
    let names = resolver.names(ADDRESS).await.unwrap();
    account_name(&names, username, ADDRESS)
}

#[tokio::test]
async fn test_name_precedence_through_resolver() {
    let resolver = StaticNames {
        names: vec!["alice.btc".to_string()],
    };
    assert_eq!(shown_name(&resolver, Some("bob")).await, "alice.btc");

    let resolver = StaticNames { names: vec![] };
    assert_eq!(shown_name(&resolver, Some("bob")).await, "bob");
    assert_eq!(shown_name(&resolver, None).await, "SP2J…9EJ7");
}

#[tokio::test]
async fn test_balance_through_service() {
    let service = RecordingBalances::new(Some(42));
    let amount = service.balance(ADDRESS).await.unwrap();
    assert_eq!(balance_label(amount, "HEY"), "42 HEY");
    assert_eq!(*service.requests.lock().unwrap(), vec![ADDRESS.to_string()]);

    let service = RecordingBalances::new(None);
    let amount = service.balance(ADDRESS).await.unwrap();
    assert_eq!(balance_label(amount, "HEY"), "0 HEY");
}

#[tokio::test]
async fn test_failed_balance_becomes_failed_fetch() {
    let service = RecordingBalances {
        fail: true,
        ..RecordingBalances::new(Some(1))
    };
    let result = service
        .balance(ADDRESS)
        .await
        .map_err(|e| format!("{e:#}"));
    let fetch = Fetch::from_result(result);

    assert!(fetch.is_failed());
    // Display falls back to zero
    assert_eq!(balance_label(fetch.ready().copied().flatten(), "HEY"), "0 HEY");
}
