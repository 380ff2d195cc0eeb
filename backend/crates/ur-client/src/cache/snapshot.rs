use crate::FetchError;

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data yet; a fetch is pending or about to start
    Loading,
    /// The most recent fetch failed
    Error,
    /// Data present and the most recent fetch succeeded
    Ready,
}

/// Point-in-time view of a cached query
#[derive(Debug)]
pub struct QuerySnapshot<T> {
    pub status: QueryStatus,
    pub data: Option<Arc<T>>,
    pub error: Option<FetchError>,
    /// Invalidated since the data was fetched
    pub is_stale: bool,
    pub is_fetching: bool,
}

// Manual Clone so T itself need not be Clone
impl<T> Clone for QuerySnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            data: self.data.clone(),
            error: self.error.clone(),
            is_stale: self.is_stale,
            is_fetching: self.is_fetching,
        }
    }
}

impl<T> QuerySnapshot<T> {
    pub fn is_ready(&self) -> bool {
        self.status == QueryStatus::Ready
    }
}
