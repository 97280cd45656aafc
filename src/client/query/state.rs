use std::rc::Rc;

use crate::client::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No successful fetch and no error yet
    Pending,
    Success,
    /// The most recent fetch failed; `data` may still hold an earlier result
    Error,
}

/// Snapshot of a cache entry as seen by a consumer
#[derive(Debug)]
pub struct QueryState<V> {
    pub status: QueryStatus,
    /// Last successful result, retained while refetching and after a failed refetch
    pub data: Option<Rc<V>>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
}

impl<V> QueryState<V> {
    pub fn is_pending(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    /// Nothing to show yet and a request is running
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.is_fetching
    }
}

impl<V> Default for QueryState<V> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Pending,
            data: None,
            error: None,
            is_fetching: false,
        }
    }
}

impl<V> Clone for QueryState<V> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching: self.is_fetching,
        }
    }
}

impl<V: PartialEq> PartialEq for QueryState<V> {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.data == other.data
            && self.error == other.error
            && self.is_fetching == other.is_fetching
    }
}
