use crate::common::{init, FlakyKeyValueStore, MockKeyValueStore};
use kirnagram_lib::domain::{error::DomainError, ReadLedger, READ_NOTIFICATIONS_KEY};
use mockall::predicate::eq;
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_load_returns_empty_on_malformed_json() {
    init();
    let mut store = MockKeyValueStore::new();
    store
        .expect_get()
        .with(eq(READ_NOTIFICATIONS_KEY))
        .times(1)
        .returning(|_| Ok(Some("[\"a\", ".to_string())));

    let ledger = ReadLedger::new(Arc::new(store));
    assert!(ledger.load().is_empty());
}

#[test]
fn test_load_returns_empty_when_store_throws() {
    init();
    let mut store = MockKeyValueStore::new();
    store
        .expect_get()
        .times(1)
        .returning(|_| Err(DomainError::StorageError("private browsing".to_string())));

    let ledger = ReadLedger::new(Arc::new(store));
    assert!(ledger.load().is_empty());
}

#[test]
fn test_load_keeps_only_string_entries() {
    init();
    let mut store = MockKeyValueStore::new();
    store
        .expect_get()
        .returning(|_| Ok(Some(r#"["a", 42, true, ["b"], "c"]"#.to_string())));

    let ledger = ReadLedger::new(Arc::new(store));
    let expected: HashSet<String> = ["a", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(ledger.load(), expected);
}

#[test]
fn test_save_then_load_round_trip_through_store() {
    init();
    let store = Arc::new(FlakyKeyValueStore::new());
    let ledger = ReadLedger::new(store.clone());
    let ids: HashSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();

    ledger.save(&ids);

    assert_eq!(
        store.raw(READ_NOTIFICATIONS_KEY).as_deref(),
        Some(r#"["a","b"]"#)
    );
    assert_eq!(ledger.load(), ids);
}

#[test]
fn test_save_overwrites_previous_content() {
    init();
    let store = Arc::new(FlakyKeyValueStore::new());
    let ledger = ReadLedger::new(store.clone());

    ledger.save(&["a".to_string(), "b".to_string()].into_iter().collect());
    ledger.save(&["c".to_string()].into_iter().collect());

    assert_eq!(store.raw(READ_NOTIFICATIONS_KEY).as_deref(), Some(r#"["c"]"#));
}

#[test]
fn test_save_failure_is_silent() {
    init();
    let store = Arc::new(FlakyKeyValueStore::new());
    store.fail_writes(true);
    let ledger = ReadLedger::new(store.clone());

    ledger.save(&["a".to_string()].into_iter().collect());

    assert_eq!(store.raw(READ_NOTIFICATIONS_KEY), None);
}

#[test]
fn test_custom_key_is_isolated() {
    init();
    let store = Arc::new(FlakyKeyValueStore::new());
    let default_ledger = ReadLedger::new(store.clone());
    let tenant_ledger = ReadLedger::with_key(store.clone(), "tenant:reads");

    tenant_ledger.save(&["t".to_string()].into_iter().collect());

    assert!(default_ledger.load().is_empty());
    assert_eq!(tenant_ledger.load().len(), 1);
}
