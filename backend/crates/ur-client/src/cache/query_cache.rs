//! Keyed, single-flight query cache.
//!
//! A `QueryCache` owns the last-known value for one `QueryKey`. Callers that
//! arrive while a fetch is in flight await the same shared future, so the
//! backend sees at most one request per refresh. The value is replaced
//! wholesale when a fetch settles; there is no partial merge.
//!
//! ## Invalidation
//!
//! `invalidate()` bumps an epoch and detaches any in-flight fetch. A detached
//! fetch still answers the callers already waiting on it and may still store
//! its data, but only a fetch started in the current epoch clears staleness.

use crate::{FetchError, QueryKey, QuerySnapshot, QueryStatus};

use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use log::{debug, warn};
use tokio::sync::Mutex;

/// Produces a fresh fetch of the cached value
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, FetchError>> + Send + Sync>;

type SharedFetch<T> = Shared<BoxFuture<'static, Result<Arc<T>, FetchError>>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCacheConfig {
    /// Start a background refresh as soon as the value is invalidated
    pub refetch_on_invalidate: bool,
}

pub struct QueryCache<T> {
    inner: Arc<Inner<T>>,
}

// Manual Clone: clones share the same entry
impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<T> {
    key: QueryKey,
    fetcher: Fetcher<T>,
    config: QueryCacheConfig,
    entry: Mutex<Entry<T>>,
}

struct Entry<T> {
    data: Option<Arc<T>>,
    error: Option<FetchError>,
    stale: bool,
    epoch: u64,
    next_fetch_id: u64,
    settled_fetch_id: u64,
    in_flight: Option<InFlight<T>>,
}

struct InFlight<T> {
    id: u64,
    epoch: u64,
    future: SharedFetch<T>,
}

impl<T> Clone for InFlight<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            epoch: self.epoch,
            future: self.future.clone(),
        }
    }
}

impl<T> Entry<T> {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            stale: false,
            epoch: 0,
            next_fetch_id: 0,
            settled_fetch_id: 0,
            in_flight: None,
        }
    }

    fn needs_fetch(&self) -> bool {
        self.data.is_none() || self.stale
    }

    /// Record a finished fetch. Every waiter calls this; only the first
    /// call for the newest fetch id changes anything.
    fn settle(&mut self, id: u64, epoch: u64, result: Result<Arc<T>, FetchError>) {
        if matches!(self.in_flight, Some(ref f) if f.id == id) {
            self.in_flight = None;
        }

        if id <= self.settled_fetch_id {
            return;
        }
        self.settled_fetch_id = id;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                if epoch == self.epoch {
                    self.stale = false;
                }
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }

    fn snapshot(&self) -> QuerySnapshot<T> {
        let status = if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Ready
        } else {
            QueryStatus::Loading
        };

        QuerySnapshot {
            status,
            data: self.data.clone(),
            error: self.error.clone(),
            is_stale: self.stale,
            is_fetching: self.in_flight.is_some(),
        }
    }
}

impl<T> QueryCache<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(key: QueryKey, fetcher: Fetcher<T>, config: QueryCacheConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                key,
                fetcher,
                config,
                entry: Mutex::new(Entry::new()),
            }),
        }
    }

    pub fn key(&self) -> QueryKey {
        self.inner.key
    }

    /// Return the cached value, fetching first if there is none or it is stale.
    pub async fn query(&self) -> QuerySnapshot<T> {
        let in_flight = {
            let mut guard = self.inner.entry.lock().await;
            let entry = &mut *guard;

            match entry.in_flight.as_ref() {
                Some(f) => {
                    debug!("Query {} joining in-flight fetch #{}", self.inner.key, f.id);
                    f.clone()
                }
                None => {
                    if !entry.needs_fetch() {
                        return entry.snapshot();
                    }
                    let f = self.start_fetch(entry);
                    entry.in_flight = Some(f.clone());
                    f
                }
            }
        };

        let result = in_flight.future.await;

        let mut guard = self.inner.entry.lock().await;
        guard.settle(in_flight.id, in_flight.epoch, result);
        guard.snapshot()
    }

    /// Current state without triggering a fetch
    pub async fn snapshot(&self) -> QuerySnapshot<T> {
        self.inner.entry.lock().await.snapshot()
    }

    /// Mark the cached value stale so the next `query()` refetches.
    pub async fn invalidate(&self) {
        {
            let mut guard = self.inner.entry.lock().await;
            guard.stale = true;
            guard.epoch += 1;
            if let Some(f) = guard.in_flight.take() {
                debug!("Query {} detached fetch #{}", self.inner.key, f.id);
            }
        }
        debug!("Query {} invalidated", self.inner.key);

        if self.inner.config.refetch_on_invalidate {
            let cache = self.clone();
            tokio::spawn(async move {
                let snapshot = cache.query().await;
                if let Some(e) = snapshot.error {
                    warn!("Background refresh of {} failed: {}", cache.key(), e);
                }
            });
        }
    }

    fn start_fetch(&self, entry: &mut Entry<T>) -> InFlight<T> {
        entry.next_fetch_id += 1;
        let id = entry.next_fetch_id;
        debug!("Query {} starting fetch #{}", self.inner.key, id);

        let fetch = (self.inner.fetcher)();
        let future = async move { fetch.await.map(Arc::new) }.boxed().shared();

        InFlight {
            id,
            epoch: entry.epoch,
            future,
        }
    }
}
