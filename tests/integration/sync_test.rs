use crate::common::{create_test_records, init, MockNotificationFeed};
use anyhow::Result;
use kirnagram_lib::{
    application::NotificationSyncUseCases,
    domain::{error::DomainError, NotificationCache, ReadLedger},
    infrastructure::stores::InMemoryKeyValueStore,
    presentation::NotificationController,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn shared_cache() -> kirnagram_lib::domain::SharedNotificationCache {
    NotificationCache::new(ReadLedger::new(Arc::new(InMemoryKeyValueStore::new()))).into_shared()
}

#[tokio::test]
async fn test_refresh_merges_reads_made_through_controller() -> Result<()> {
    init();
    let mut feed = MockNotificationFeed::new();
    feed.expect_fetch_notifications()
        .times(2)
        .returning(|| Ok(create_test_records(&[("a", false), ("b", false), ("c", true)])));

    let cache = shared_cache();
    let controller = NotificationController::new(cache.clone());
    let use_cases = NotificationSyncUseCases::new(Arc::new(feed), cache);

    assert_eq!(use_cases.refresh().await?, 2);
    controller.mark_as_read("b");
    assert_eq!(use_cases.refresh().await?, 1);

    let response = controller.get_notifications();
    assert_eq!(response.total, 3);
    assert_eq!(response.unread_count, 1);
    assert!(response.notifications.iter().find(|n| n.id == "b").unwrap().read);

    Ok(())
}

#[tokio::test]
async fn test_refresh_error_propagates_and_preserves_cache() -> Result<()> {
    init();
    let mut feed = MockNotificationFeed::new();
    feed.expect_fetch_notifications()
        .times(1)
        .returning(|| Err(DomainError::FeedError("401 Unauthorized".to_string())));

    let cache = shared_cache();
    cache
        .lock()
        .set_notifications(create_test_records(&[("a", false)]));
    let use_cases = NotificationSyncUseCases::new(Arc::new(feed), cache.clone());

    let err = use_cases.refresh().await.unwrap_err();
    assert!(err.to_string().contains("401"));
    assert_eq!(cache.lock().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_polling_stops_on_cancel() -> Result<()> {
    init();
    let mut feed = MockNotificationFeed::new();
    feed.expect_fetch_notifications()
        .returning(|| Ok(create_test_records(&[("a", false)])));

    let cache = shared_cache();
    let use_cases = Arc::new(NotificationSyncUseCases::new(Arc::new(feed), cache.clone()));
    let cancel = CancellationToken::new();
    let handle = use_cases.spawn_polling(Duration::from_millis(20), cancel.clone())?;

    for _ in 0..100 {
        if !cache.lock().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(1), handle).await??;

    assert_eq!(cache.lock().unread_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_polling_with_zero_interval_never_starts() -> Result<()> {
    init();
    let mut feed = MockNotificationFeed::new();
    feed.expect_fetch_notifications().times(0);

    let cache = shared_cache();
    let use_cases = Arc::new(NotificationSyncUseCases::new(Arc::new(feed), cache.clone()));
    let result = use_cases.spawn_polling(Duration::ZERO, CancellationToken::new());

    assert!(matches!(result, Err(DomainError::ConfigurationError(_))));
    assert!(cache.lock().is_empty());
    Ok(())
}

#[test]
fn test_controller_accepts_listing_body() -> Result<()> {
    init();
    let controller = NotificationController::new(shared_cache());
    let body = r#"{"notifications": [
        {"id": "n1", "userId": "u1", "userName": "alice", "userImage": null,
         "action": "follow", "description": "followed you",
         "timestamp": "2024-05-01T10:00:00Z", "read": false},
        {"id": "n2", "user_id": "u2", "user_name": "bob",
         "action": "like", "description": "liked your post",
         "timestamp": "2024-05-01T09:00:00Z", "read": true}
    ]}"#;

    let response = controller
        .set_notifications_from_json(body)
        .map_err(|e| anyhow::anyhow!(e.message))?;
    assert_eq!(response.total, 2);
    assert_eq!(response.unread_count, 1);
    Ok(())
}
