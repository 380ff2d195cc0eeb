use crate::tests::support::FakeRegistry;
use crate::{QueryCacheConfig, QueryKey, QueryStatus, user_list_cache};

use std::sync::Arc;
use std::sync::atomic::Ordering;

use futures::future::join_all;
use googletest::prelude::*;
use tokio::sync::Semaphore;

#[tokio::test]
async fn given_empty_cache_when_queried_then_fetches_and_is_ready() {
    // Given
    let api = FakeRegistry::new();
    api.seed("Ada", "ada@x.com");
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());

    // When
    let snapshot = cache.query().await;

    // Then
    assert_that!(snapshot.status, eq(QueryStatus::Ready));
    assert_that!(snapshot.data.as_ref().map(|d| d.len()), some(eq(1)));
    assert_that!(snapshot.is_stale, eq(false));
    assert_that!(snapshot.is_fetching, eq(false));
    assert_that!(cache.key(), eq(QueryKey::USERS));
}

#[tokio::test]
async fn given_fresh_value_when_queried_again_then_backend_not_called() {
    // Given
    let api = FakeRegistry::new();
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());
    cache.query().await;

    // When
    cache.query().await;
    cache.query().await;

    // Then
    assert_that!(api.list_calls(), eq(1));
}

#[tokio::test]
async fn given_pending_fetch_when_queried_concurrently_then_backend_called_once() {
    // Given
    let gate = Arc::new(Semaphore::new(0));
    let api = FakeRegistry::gated(Arc::clone(&gate));
    api.seed("Ada", "ada@x.com");
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());

    // When
    let release = async {
        tokio::task::yield_now().await;
        gate.add_permits(1);
    };
    let (snapshots, ()) = tokio::join!(join_all((0..5).map(|_| cache.query())), release);

    // Then
    assert_that!(api.list_calls(), eq(1));
    assert_that!(snapshots.len(), eq(5));
    for snapshot in snapshots {
        assert_that!(snapshot.status, eq(QueryStatus::Ready));
        assert_that!(snapshot.data.map(|d| d.len()), some(eq(1)));
    }
}

#[tokio::test]
async fn given_fresh_value_when_invalidated_then_next_query_refetches() {
    // Given
    let api = FakeRegistry::new();
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());
    cache.query().await;
    api.seed("Ada", "ada@x.com");

    // When
    cache.invalidate().await;
    let stale = cache.snapshot().await;
    let refreshed = cache.query().await;

    // Then
    assert_that!(stale.is_stale, eq(true));
    assert_that!(stale.data.map(|d| d.len()), some(eq(0)));
    assert_that!(refreshed.is_stale, eq(false));
    assert_that!(refreshed.data.map(|d| d.len()), some(eq(1)));
    assert_that!(api.list_calls(), eq(2));
}

#[tokio::test]
async fn given_fetch_in_flight_when_invalidated_then_result_stays_stale() {
    // Given
    let gate = Arc::new(Semaphore::new(0));
    let api = FakeRegistry::gated(Arc::clone(&gate));
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());

    // When
    let invalidate_then_release = async {
        tokio::task::yield_now().await;
        cache.invalidate().await;
        gate.add_permits(2);
    };
    let (first, ()) = tokio::join!(cache.query(), invalidate_then_release);
    let second = cache.query().await;

    // Then
    assert_that!(first.status, eq(QueryStatus::Ready));
    assert_that!(first.is_stale, eq(true));
    assert_that!(second.is_stale, eq(false));
    assert_that!(api.list_calls(), eq(2));
}

#[tokio::test]
async fn given_failing_backend_when_queried_then_error_status_without_data() {
    // Given
    let api = FakeRegistry::new();
    api.fail_list.store(true, Ordering::SeqCst);
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());

    // When
    let snapshot = cache.query().await;

    // Then
    assert_that!(snapshot.status, eq(QueryStatus::Error));
    assert_that!(snapshot.data, none());
    assert_that!(
        snapshot.error.map(|e| e.message),
        some(contains_substring("Database operation failed"))
    );
}

#[tokio::test]
async fn given_error_when_backend_recovers_then_next_query_is_ready() {
    // Given
    let api = FakeRegistry::new();
    api.fail_list.store(true, Ordering::SeqCst);
    let cache = user_list_cache(api.clone(), QueryCacheConfig::default());
    cache.query().await;

    // When
    api.fail_list.store(false, Ordering::SeqCst);
    let snapshot = cache.query().await;

    // Then
    assert_that!(snapshot.status, eq(QueryStatus::Ready));
    assert_that!(snapshot.error, none());
    assert_that!(api.list_calls(), eq(2));
}

#[tokio::test]
async fn given_refetch_on_invalidate_when_invalidated_then_refreshes_in_background() {
    // Given
    let api = FakeRegistry::new();
    let cache = user_list_cache(
        api.clone(),
        QueryCacheConfig {
            refetch_on_invalidate: true,
        },
    );
    cache.query().await;
    api.seed("Ada", "ada@x.com");

    // When
    cache.invalidate().await;
    for _ in 0..10 {
        if !cache.snapshot().await.is_stale {
            break;
        }
        tokio::task::yield_now().await;
    }

    // Then
    let snapshot = cache.snapshot().await;
    assert_that!(snapshot.is_stale, eq(false));
    assert_that!(snapshot.data.map(|d| d.len()), some(eq(1)));
    assert_that!(api.list_calls(), eq(2));
}
