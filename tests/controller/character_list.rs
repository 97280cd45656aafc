//! Tests for CharacterListController.

use chrono::Duration;
use rickdex::client::{
    api::ApiClient, controller::CharacterListController, query::QueryClient, util::ViewMode,
};
use rickdex_test_utils::prelude::*;

fn query_client(test: &TestSetup) -> QueryClient {
    QueryClient::with_api(
        ApiClient::new(test.api_url()),
        Duration::minutes(5),
        Duration::minutes(30),
    )
}

fn first_id(list: &CharacterListController) -> Option<i64> {
    list.state()
        .data
        .as_ref()
        .and_then(|data| data.results.first())
        .map(|character| character.id)
}

/// Tests the initial load of the listing.
///
/// Expected: page 1 in grid layout, loading until the request settles
#[tokio::test]
async fn mounts_on_first_page() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 1);
    let mut list = CharacterListController::new(query_client(&test));

    let request = list.mount();
    assert_eq!(request.page(), 1);
    assert_eq!(list.view_mode(), ViewMode::Grid);
    assert!(list.state().is_loading());
    assert_eq!(list.page_label(), "Page 1 of ...");

    let page = request.settle().await;

    assert!(list.apply(page));
    assert_eq!(first_id(&list), Some(1));
    assert!(!list.state().is_fetching);
    assert!(list.can_go_next());
    assert!(!list.can_go_previous());
    assert_eq!(list.page_label(), "Page 1 of 42");

    test.assert_mocks();
}

/// Tests switching between grid and table layout.
///
/// Expected: one network call in total, records unchanged
#[tokio::test]
async fn toggling_view_mode_does_not_fetch() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 1);
    let mut list = CharacterListController::new(query_client(&test));

    let page = list.mount().settle().await;
    list.apply(page);

    list.set_view_mode(ViewMode::Table);
    assert_eq!(list.view_mode(), ViewMode::Table);
    assert_eq!(first_id(&list), Some(1));

    list.set_view_mode(ViewMode::Grid);
    assert_eq!(list.view_mode(), ViewMode::Grid);
    assert_eq!(list.page(), 1);
    assert_eq!(first_id(&list), Some(1));

    test.assert_mocks();
}

/// Tests a page request that settles after the user already moved on.
///
/// Expected: the late page 2 result is not applied and page 1 stays on screen
#[tokio::test]
async fn superseded_page_is_not_applied() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 1)
        .create_page_endpoint(2, 42, 1);
    let mut list = CharacterListController::new(query_client(&test));

    let page = list.mount().settle().await;
    list.apply(page);

    let to_second = list.next().unwrap();
    assert_eq!(list.page(), 2);
    assert!(list.state().is_loading());

    let back_to_first = list.previous().unwrap();
    assert_eq!(list.page(), 1);
    assert!(list.apply(back_to_first.settle().await));

    let late = to_second.settle().await;

    assert_eq!(late, 2);
    assert!(!list.apply(late));
    assert_eq!(list.page(), 1);
    assert_eq!(first_id(&list), Some(1));

    test.assert_mocks();
}

/// Tests paging forward and back within the freshness window.
///
/// Expected: each page fetched once, the return trip served from the cache
#[tokio::test]
async fn paging_back_uses_cache() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 1)
        .create_page_endpoint(2, 42, 1);
    let mut list = CharacterListController::new(query_client(&test));

    let page = list.mount().settle().await;
    list.apply(page);
    let page = list.next().unwrap().settle().await;
    list.apply(page);
    assert_eq!(first_id(&list), Some(21));
    assert!(list.can_go_previous());

    let request = list.previous().unwrap();
    assert!(!list.state().is_fetching);
    assert_eq!(first_id(&list), Some(1));
    list.apply(request.settle().await);

    test.assert_mocks();
}

/// Tests leaving the listing on page 2 and coming back.
///
/// Expected: the new listing starts on page 1 in grid layout with page 1 served from the cache
#[tokio::test]
async fn remount_resets_to_first_page() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 1)
        .create_page_endpoint(2, 42, 1);
    let client = query_client(&test);

    let mut list = CharacterListController::new(client.clone());
    let page = list.mount().settle().await;
    list.apply(page);
    let page = list.next().unwrap().settle().await;
    list.apply(page);
    list.set_view_mode(ViewMode::Table);
    drop(list);

    let mut list = CharacterListController::new(client);
    let request = list.mount();

    assert_eq!(list.page(), 1);
    assert_eq!(list.view_mode(), ViewMode::Grid);
    assert!(!list.state().is_fetching);
    assert_eq!(first_id(&list), Some(1));
    list.apply(request.settle().await);

    test.assert_mocks();
}

/// Tests the refresh action on a fresh page.
///
/// Expected: a second network call for the same page
#[tokio::test]
async fn refresh_refetches_current_page() {
    let mut test = TestSetup::new().await;
    test.character_api().create_page_endpoint(1, 42, 2);
    let mut list = CharacterListController::new(query_client(&test));

    let page = list.mount().settle().await;
    list.apply(page);

    let request = list.refresh();
    assert!(list.state().is_fetching);
    assert_eq!(first_id(&list), Some(1));
    assert!(list.apply(request.settle().await));

    test.assert_mocks();
}

/// Tests recovery from a failed page via the first-page action.
///
/// Expected: error state on page 2, then page 1 loaded; no action when already on page 1
#[tokio::test]
async fn first_recovers_from_failed_page() {
    let mut test = TestSetup::new().await;
    test.character_api()
        .create_page_endpoint(1, 42, 1)
        .create_page_error_endpoint(2, 500, "Internal server error", 1);
    let mut list = CharacterListController::new(query_client(&test));

    let page = list.mount().settle().await;
    list.apply(page);
    assert!(list.first().is_none());

    let page = list.next().unwrap().settle().await;
    list.apply(page);
    assert!(list.state().is_error());
    assert!(list.state().data.is_none());
    assert!(!list.can_go_next());

    let request = list.first().unwrap();
    list.apply(request.settle().await);

    assert_eq!(list.page(), 1);
    assert_eq!(first_id(&list), Some(1));

    test.assert_mocks();
}
