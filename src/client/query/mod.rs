//! Keyed in-memory query cache.
//!
//! Wraps calls to the [`ApiClient`](crate::client::api::ApiClient) with a cache keyed by
//! resource and parameters. Each key has at most one request in flight; concurrent consumers
//! of the same key share it. Successful data is served without a network call for the
//! configured freshness window and stays visible while a refetch runs or after one fails.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), matching the UI event loop it runs on.

pub mod cache;
pub mod client;
pub mod key;
pub mod state;

pub use cache::{QueryCache, QueryFuture};
pub use client::QueryClient;
pub use key::QueryKey;
pub use state::{QueryState, QueryStatus};
