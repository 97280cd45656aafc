//! Tests for QueryClient character page queries.

use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, Duration, Utc};
use rickdex::client::{
    api::ApiClient,
    query::{QueryClient, QueryStatus},
    util::pagination,
};
use rickdex_test_utils::prelude::*;

fn query_client(test: &TestSetup) -> QueryClient {
    QueryClient::with_api(
        ApiClient::new(test.api_url()),
        Duration::minutes(5),
        Duration::minutes(30),
    )
}

/// Tests requesting the same page twice within the freshness window.
///
/// Expected: one network call, both results identical
#[tokio::test]
async fn same_page_within_window_makes_one_request() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 1);
    let client = query_client(&test);

    let first = client.character_page(1).await.unwrap();
    let second = client.character_page(1).await.unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(client.character_page_state(1).status, QueryStatus::Success);

    test.assert_mocks();
}

/// Tests two consumers asking for the same page at the same time.
///
/// Expected: one network call shared by both
#[tokio::test]
async fn concurrent_requests_share_one_call() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 1);
    let client = query_client(&test);

    let first = client.character_page(1);
    let second = client.character_page(1);
    assert!(client.character_page_state(1).is_fetching);

    let (first, second) = futures::join!(first, second);

    assert!(Rc::ptr_eq(&first.unwrap(), &second.unwrap()));
    assert!(!client.character_page_state(1).is_fetching);

    test.assert_mocks();
}

/// Tests the manual refresh action.
///
/// Expected: a second network call despite fresh data
#[tokio::test]
async fn refetch_ignores_freshness() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 2);
    let client = query_client(&test);

    client.character_page(1).await.unwrap();
    client.refetch_character_page(1).await.unwrap();

    test.assert_mocks();
}

/// Tests access after the freshness window has elapsed.
///
/// Expected: a second network call
#[tokio::test]
async fn refetches_once_stale() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 2);

    let now: Rc<Cell<DateTime<Utc>>> = Rc::new(Cell::new(Utc::now()));
    let clock_now = Rc::clone(&now);
    let client = query_client(&test).with_clock(Rc::new(move || clock_now.get()));

    client.character_page(1).await.unwrap();
    now.set(now.get() + Duration::minutes(4));
    client.character_page(1).await.unwrap();
    now.set(now.get() + Duration::minutes(2));
    client.character_page(1).await.unwrap();

    test.assert_mocks();
}

/// Tests stepping from page 1 to page 2 using the API's next pointer.
///
/// Expected: page 2 requested once and its results replace page 1's
#[tokio::test]
async fn next_page_requests_following_page() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 1)
        .create_page_endpoint(2, 42, 1);
    let client = query_client(&test);

    let first = client.character_page(1).await.unwrap();
    let next = pagination::next_page(1, &first.info).unwrap();
    let second = client.character_page(next).await.unwrap();

    assert_eq!(next, 2);
    assert!(pagination::can_go_previous(next));
    assert_eq!(second.results.first().map(|c| c.id), Some(21));
    assert_ne!(first.results, second.results);

    test.assert_mocks();
}

/// Tests that invalidation forces the next access to hit the API.
///
/// Expected: two network calls, data visible in between
#[tokio::test]
async fn invalidate_all_forces_refetch() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(3, 42, 2);
    let client = query_client(&test);

    client.character_page(3).await.unwrap();
    client.invalidate_all();
    assert!(client.character_page_state(3).data.is_some());
    client.character_page(3).await.unwrap();

    test.assert_mocks();
}

/// Tests a single page being invalidated.
///
/// Expected: only the invalidated page is refetched
#[tokio::test]
async fn invalidate_single_page() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 2)
        .create_page_endpoint(2, 42, 1);
    let client = query_client(&test);

    client.character_page(1).await.unwrap();
    client.character_page(2).await.unwrap();
    client.invalidate_character_page(1);
    client.character_page(1).await.unwrap();
    client.character_page(2).await.unwrap();

    test.assert_mocks();
}

/// Tests a failing page request.
///
/// Expected: error state with the HTTP error and no data
#[tokio::test]
async fn failed_request_exposes_error_state() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_error_endpoint(1, 500, "Internal server error", 1);
    let client = query_client(&test);

    let result = client.character_page(1).await;
    let state = client.character_page_state(1);

    assert!(result.is_err());
    assert!(state.is_error());
    assert!(state.data.is_none());
    assert_eq!(state.error, result.err());

    test.assert_mocks();
}
