pub(crate) mod fetch_error;
pub(crate) mod query_cache;
pub(crate) mod query_key;
pub(crate) mod snapshot;

pub use fetch_error::FetchError;
pub use query_cache::{Fetcher, QueryCache, QueryCacheConfig};
pub use query_key::QueryKey;
pub use snapshot::{QuerySnapshot, QueryStatus};
