use std::{cell::RefCell, collections::HashMap, future::Future, rc::Rc};

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use futures::future::{self, FutureExt, LocalBoxFuture, Shared, WeakShared};

use crate::client::{
    error::ApiError,
    query::{QueryKey, QueryState, QueryStatus},
};

pub type QueryResult<V> = Result<Rc<V>, ApiError>;

/// Future handed to consumers of a query; resolves from the cache or the shared request
pub type QueryFuture<V> = LocalBoxFuture<'static, QueryResult<V>>;

/// Source of the current time, injectable so freshness can be tested
pub type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

type InFlight<V> = Shared<QueryFuture<V>>;
/// Held by the entry so a request nobody awaits any more is dropped and cancelled
type InFlightHandle<V> = WeakShared<QueryFuture<V>>;
type Entries<V> = Rc<RefCell<HashMap<QueryKey, Entry<V>>>>;

struct Entry<V> {
    data: Option<Rc<V>>,
    error: Option<ApiError>,
    /// Time of the last successful fetch, cleared by invalidation
    updated_at: Option<DateTime<Utc>>,
    touched_at: DateTime<Utc>,
    in_flight: Option<InFlightHandle<V>>,
}

impl<V> Entry<V> {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            touched_at: now,
            in_flight: None,
        }
    }

    /// The pending request, unless every consumer has dropped it
    fn live_request(&self) -> Option<InFlight<V>> {
        self.in_flight.as_ref().and_then(WeakShared::upgrade)
    }

    fn fresh_data(&self, now: DateTime<Utc>, stale_time: Duration) -> Option<Rc<V>> {
        let updated_at = self.updated_at?;

        if now.signed_duration_since(updated_at) < stale_time {
            self.data.clone()
        } else {
            None
        }
    }

    fn snapshot(&self) -> QueryState<V> {
        let status = if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Pending
        };

        QueryState {
            status,
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching: self.live_request().is_some(),
        }
    }
}

/// Keyed cache for one resource type.
///
/// Cloning is cheap and every clone shares the same store.
pub struct QueryCache<V> {
    entries: Entries<V>,
    stale_time: Duration,
    cache_time: Duration,
    clock: Clock,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            stale_time: self.stale_time,
            cache_time: self.cache_time,
            clock: Rc::clone(&self.clock),
        }
    }
}

impl<V: 'static> QueryCache<V> {
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// - `stale_time` - How long a successful result is served without a network call
    /// - `cache_time` - How long an entry nobody has queried is kept before being discarded
    pub fn new(stale_time: Duration, cache_time: Duration) -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            stale_time,
            cache_time,
            clock: Rc::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Resolves the query for `key`, calling `fetcher` only when needed.
    ///
    /// - Joins the in-flight request for `key` if there is one, even when `refetch` is set
    /// - Otherwise serves fresh cached data unless `refetch` is set
    /// - Otherwise calls `fetcher` once and registers the request before returning, so
    ///   [`state`](Self::state) reports `is_fetching` immediately
    ///
    /// A failed request records the error but keeps the previous data. Dropping every future
    /// returned for a request cancels it and the entry stops reporting `is_fetching`.
    pub fn query<F, Fut>(&self, key: QueryKey, refetch: bool, fetcher: F) -> QueryFuture<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ApiError>> + 'static,
    {
        let now = (self.clock)();
        self.evict_expired(now);

        {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.entry(key).or_insert_with(|| Entry::new(now));
            entry.touched_at = now;

            if let Some(in_flight) = entry.live_request() {
                tracing::debug!("Joining in-flight request for {}", key);
                return in_flight.boxed_local();
            }
            if entry.in_flight.take().is_some() {
                tracing::debug!("Previous request for {} was abandoned", key);
            }

            if !refetch {
                if let Some(data) = entry.fresh_data(now, self.stale_time) {
                    tracing::debug!("Serving {} from cache", key);
                    return future::ready(Ok(data)).boxed_local();
                }
            }
        }

        let request = fetcher();
        let entries = Rc::clone(&self.entries);
        let clock = Rc::clone(&self.clock);
        let in_flight = async move {
            let result = request.await.map(Rc::new);
            settle(&entries, key, &result, clock());
            result
        }
        .boxed_local()
        .shared();

        self.entries
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Entry::new(now))
            .in_flight = in_flight.downgrade();

        in_flight.boxed_local()
    }

    /// Snapshot of the entry for `key`; `Pending` with no data if it was never queried
    pub fn state(&self, key: &QueryKey) -> QueryState<V> {
        self.entries
            .borrow()
            .get(key)
            .map(Entry::snapshot)
            .unwrap_or_default()
    }

    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        let now = (self.clock)();

        self.entries
            .borrow()
            .get(key)
            .and_then(|entry| entry.fresh_data(now, self.stale_time))
            .is_some()
    }

    /// Marks `key` stale so the next query refetches it; cached data stays visible
    pub fn invalidate(&self, key: &QueryKey) {
        if let Some(entry) = self.entries.borrow_mut().get_mut(key) {
            entry.updated_at = None;
        }
    }

    pub fn invalidate_all(&self) {
        for entry in self.entries.borrow_mut().values_mut() {
            entry.updated_at = None;
        }
    }

    fn evict_expired(&self, now: DateTime<Utc>) {
        let cache_time = self.cache_time;

        self.entries.borrow_mut().retain(|key, entry| {
            let keep = entry.live_request().is_some()
                || now.signed_duration_since(entry.touched_at) < cache_time;
            if !keep {
                tracing::debug!("Evicting {} from query cache", key);
            }
            keep
        });
    }
}

fn settle<V>(entries: &Entries<V>, key: QueryKey, result: &QueryResult<V>, now: DateTime<Utc>) {
    let mut entries = entries.borrow_mut();
    let entry = entries.entry(key).or_insert_with(|| Entry::new(now));
    entry.in_flight = None;
    entry.touched_at = now;

    match result {
        Ok(data) => {
            entry.data = Some(Rc::clone(data));
            entry.error = None;
            entry.updated_at = Some(now);
        }
        Err(err) => {
            tracing::warn!("Query {} failed: {}", key, err);
            entry.error = Some(err.clone());
        }
    }
}
