//! ur-client library
//!
//! HTTP client for ur-server, the keyed query cache that fronts it, and the
//! list controller the `ur` binary drives.

pub(crate) mod cache;
pub(crate) mod client;
pub(crate) mod controller;
pub mod logger;
pub(crate) mod notifier;
pub mod session;

#[cfg(test)]
mod tests;

pub use cache::{Fetcher, FetchError, QueryCache, QueryCacheConfig, QueryKey, QuerySnapshot, QueryStatus};
pub use client::{ClientError, ClientResult, RegistryApi, RegistryClient};
pub use controller::{
    ControllerError, ControllerResult, ControllerState, InputField, Key, ListController, ListView,
    SubmitOutcome, UserRow,
};
pub use notifier::{
    ConsoleNotifier, LogNotifier, Notifier, USER_ADD_FAILED_MESSAGE, USER_ADDED_MESSAGE,
};

use ur_core::User;

use std::sync::Arc;

use futures::FutureExt;

/// Cache of the registry's user list under `QueryKey::USERS`
pub fn user_list_cache(api: Arc<dyn RegistryApi>, config: QueryCacheConfig) -> QueryCache<Vec<User>> {
    let fetcher: Fetcher<Vec<User>> = Arc::new(move || {
        let api = Arc::clone(&api);
        async move { api.list_users().await.map_err(FetchError::from) }.boxed()
    });

    QueryCache::new(QueryKey::USERS, fetcher, config)
}
