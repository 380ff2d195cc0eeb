//! In-process fakes for the registry and the notification sink.

use crate::{ClientError, ClientResult, Notifier, RegistryApi};

use ur_core::User;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Semaphore;

/// Registry backed by a Vec, with call counters and failure switches
#[derive(Default)]
pub(crate) struct FakeRegistry {
    users: Mutex<Vec<User>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    /// When set, every list call waits for one permit
    list_gate: Option<Arc<Semaphore>>,
}

impl FakeRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gated(gate: Arc<Semaphore>) -> Arc<Self> {
        Arc::new(Self {
            list_gate: Some(gate),
            ..Self::default()
        })
    }

    pub fn seed(&self, name: &str, email: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i64 + 1,
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        user
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryApi for FakeRegistry {
    async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref gate) = self.list_gate {
            gate.acquire().await.unwrap().forget();
        }

        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(500, "Database operation failed".into()));
        }

        Ok(self.stored())
    }

    async fn create_user(&self, name: &str, email: &str) -> ClientResult<User> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(500, "Database operation failed".into()));
        }
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(ClientError::api_error(400, "Email and name are required".into()));
        }
        if self.stored().iter().any(|u| u.email == email) {
            return Err(ClientError::api_error(
                409,
                "A user with this email already exists".into(),
            ));
        }

        Ok(self.seed(name, email))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Toast {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::Error(message.to_string()));
    }
}
