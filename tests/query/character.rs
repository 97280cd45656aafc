//! Tests for QueryClient single character queries.

use chrono::Duration;
use rickdex::client::{
    api::ApiClient,
    query::{QueryClient, QueryStatus},
};
use rickdex_test_utils::prelude::*;

fn query_client(test: &TestSetup) -> QueryClient {
    QueryClient::with_api(
        ApiClient::new(test.api_url()),
        Duration::minutes(5),
        Duration::minutes(30),
    )
}

/// Tests that a character is fetched once and then served from the cache.
///
/// Expected: one network call, success state
#[tokio::test]
async fn caches_character_by_id() {
    let mut test = TestSetup::new().await;
    test.character_api().create_character_endpoint(2, 1);
    let client = query_client(&test);

    client.character(2).await.unwrap();
    let character = client.character(2).await.unwrap();

    assert_eq!(character.id, 2);
    assert_eq!(client.character_state(2).status, QueryStatus::Success);

    test.assert_mocks();
}

/// Tests that character and page caches do not collide on equal numbers.
///
/// Expected: both endpoints called once
#[tokio::test]
async fn page_and_character_keys_are_distinct() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 1)
        .create_character_endpoint(1, 1);
    let client = query_client(&test);

    client.character_page(1).await.unwrap();
    client.character(1).await.unwrap();

    test.assert_mocks();
}

/// Tests the refresh of a single character.
///
/// Expected: two network calls
#[tokio::test]
async fn refetch_character_hits_api() {
    let mut test = TestSetup::new().await;
    test.character_api().create_character_endpoint(5, 2);
    let client = query_client(&test);

    client.character(5).await.unwrap();
    client.refetch_character(5).await.unwrap();

    test.assert_mocks();
}

/// Tests an unknown character ID.
///
/// Expected: error state recognised as not found
#[tokio::test]
async fn unknown_character_is_not_found() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_character_error_endpoint(9999, 404, "Character not found", 1);
    let client = query_client(&test);

    let _ = client.character(9999).await;
    let state = client.character_state(9999);

    assert!(state.is_error());
    assert!(state.error.is_some_and(|err| err.is_not_found()));

    test.assert_mocks();
}
