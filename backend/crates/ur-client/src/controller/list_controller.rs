//! List controller: fetch-on-mount, add-user form, per-item remove affordance.

use crate::notifier::{USER_ADD_FAILED_MESSAGE, USER_ADDED_MESSAGE};
use crate::{
    ControllerError, ControllerResult, InputField, Key, ListView, Notifier, QueryCache,
    QueryStatus, RegistryApi,
};

use ur_core::{User, UserId};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed, not yet mounted
    Idle,
    Loading,
    Ready,
    Error,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was blank after trimming; nothing was sent
    Skipped,
    Created(User),
    /// The registry rejected or failed the request; inputs kept for retry
    Failed(String),
}

pub struct ListController {
    api: Arc<dyn RegistryApi>,
    cache: QueryCache<Vec<User>>,
    notifier: Arc<dyn Notifier>,
    state: ControllerState,
    users: Option<Arc<Vec<User>>>,
    name_input: String,
    email_input: String,
}

impl ListController {
    pub fn new(
        api: Arc<dyn RegistryApi>,
        cache: QueryCache<Vec<User>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
            state: ControllerState::Idle,
            users: None,
            name_input: String::new(),
            email_input: String::new(),
        }
    }

    /// Enter Loading and pull the list through the cache.
    pub async fn mount(&mut self) -> ControllerState {
        self.state = ControllerState::Loading;
        self.refresh().await
    }

    /// Re-read the list through the cache, fetching if it is stale.
    pub async fn refresh(&mut self) -> ControllerState {
        let snapshot = self.cache.query().await;

        self.state = match snapshot.status {
            QueryStatus::Ready => ControllerState::Ready,
            QueryStatus::Error => {
                if let Some(ref e) = snapshot.error {
                    warn!("Loading {} failed: {}", self.cache.key(), e);
                }
                ControllerState::Error
            }
            QueryStatus::Loading => ControllerState::Loading,
        };
        self.users = snapshot.data;

        self.state
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Last list received from the cache, in insertion order
    pub fn users(&self) -> &[User] {
        self.users.as_deref().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_input(&mut self, field: InputField, value: &str) {
        match field {
            InputField::Name => self.name_input = value.to_string(),
            InputField::Email => self.email_input = value.to_string(),
        }
    }

    pub fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Name => &self.name_input,
            InputField::Email => &self.email_input,
        }
    }

    /// Send the pending name/email to the registry.
    ///
    /// Success clears both inputs, invalidates the cache, notifies, then
    /// refreshes. Failure notifies and leaves the inputs as typed.
    pub async fn submit_new_user(&mut self) -> SubmitOutcome {
        let name = self.name_input.trim().to_string();
        let email = self.email_input.trim().to_string();

        if name.is_empty() || email.is_empty() {
            debug!("Submit skipped: name and email are both required");
            return SubmitOutcome::Skipped;
        }

        match self.api.create_user(&name, &email).await {
            Ok(user) => {
                self.name_input.clear();
                self.email_input.clear();
                self.cache.invalidate().await;
                self.notifier.success(USER_ADDED_MESSAGE);
                self.refresh().await;
                SubmitOutcome::Created(user)
            }
            Err(e) => {
                warn!("Create user failed: {}", e);
                self.notifier.error(USER_ADD_FAILED_MESSAGE);
                SubmitOutcome::Failed(e.user_message().to_string())
            }
        }
    }

    /// Key handler shared by both inputs; the confirm key submits.
    pub async fn on_key(&mut self, field: InputField, key: Key) -> Option<SubmitOutcome> {
        if !key.is_confirm() {
            return None;
        }

        debug!("Confirm key in {:?} field", field);
        Some(self.submit_new_user().await)
    }

    /// Per-item remove affordance. The registry exposes no delete, so this
    /// leaves the list and the store untouched.
    #[track_caller]
    pub fn remove_user(&self, id: UserId) -> ControllerResult<()> {
        warn!("Remove requested for user {} but the registry has no delete", id);
        Err(ControllerError::RemoveUnsupported {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn view(&self) -> ListView {
        match self.state {
            ControllerState::Idle | ControllerState::Loading => ListView::Loading,
            ControllerState::Error => ListView::Error,
            ControllerState::Ready => ListView::ready(self.users()),
        }
    }

    pub fn render(&self) -> String {
        self.view().to_string()
    }
}
