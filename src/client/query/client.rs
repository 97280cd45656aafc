use chrono::Duration;

use crate::{
    client::{
        api::ApiClient,
        config::Config,
        query::{cache::Clock, QueryCache, QueryFuture, QueryKey, QueryState},
    },
    model::character::{Character, CharacterPage},
};

/// Application-wide query cache service.
///
/// Constructed once when the app starts and shared through the Dioxus context. All clones
/// share the same caches, so a page fetched by one controller is visible to every other.
#[derive(Clone)]
pub struct QueryClient {
    api: ApiClient,
    pages: QueryCache<CharacterPage>,
    characters: QueryCache<Character>,
}

impl QueryClient {
    pub fn new(config: &Config) -> Self {
        Self::with_api(
            ApiClient::new(config.api_base_url.as_str()),
            config.stale_time,
            config.cache_time,
        )
    }

    pub fn with_api(api: ApiClient, stale_time: Duration, cache_time: Duration) -> Self {
        Self {
            api,
            pages: QueryCache::new(stale_time, cache_time),
            characters: QueryCache::new(stale_time, cache_time),
        }
    }

    pub fn with_clock(self, clock: Clock) -> Self {
        Self {
            api: self.api,
            pages: self.pages.with_clock(clock.clone()),
            characters: self.characters.with_clock(clock),
        }
    }

    /// Character listing page, served from the cache while fresh
    pub fn character_page(&self, page: u32) -> QueryFuture<CharacterPage> {
        self.query_page(page, false)
    }

    /// Character listing page, fetched from the API regardless of freshness
    pub fn refetch_character_page(&self, page: u32) -> QueryFuture<CharacterPage> {
        self.query_page(page, true)
    }

    pub fn character_page_state(&self, page: u32) -> QueryState<CharacterPage> {
        self.pages.state(&QueryKey::CharacterPage { page })
    }

    pub fn invalidate_character_page(&self, page: u32) {
        self.pages.invalidate(&QueryKey::CharacterPage { page });
    }

    /// Single character, served from the cache while fresh
    pub fn character(&self, id: i64) -> QueryFuture<Character> {
        self.query_character(id, false)
    }

    pub fn refetch_character(&self, id: i64) -> QueryFuture<Character> {
        self.query_character(id, true)
    }

    pub fn character_state(&self, id: i64) -> QueryState<Character> {
        self.characters.state(&QueryKey::Character { id })
    }

    /// Marks every cached page and character stale
    pub fn invalidate_all(&self) {
        self.pages.invalidate_all();
        self.characters.invalidate_all();
    }

    fn query_page(&self, page: u32, refetch: bool) -> QueryFuture<CharacterPage> {
        let api = self.api.clone();

        self.pages
            .query(QueryKey::CharacterPage { page }, refetch, move || async move {
                api.fetch_characters(page).await
            })
    }

    fn query_character(&self, id: i64, refetch: bool) -> QueryFuture<Character> {
        let api = self.api.clone();

        self.characters
            .query(QueryKey::Character { id }, refetch, move || async move {
                api.fetch_character(id).await
            })
    }
}
