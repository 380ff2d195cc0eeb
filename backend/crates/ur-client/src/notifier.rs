//! Transient operator notifications ("toasts").

use log::{info, warn};

/// Shown after a user is created
pub const USER_ADDED_MESSAGE: &str = "New User Added!";
/// Shown when creating a user fails
pub const USER_ADD_FAILED_MESSAGE: &str = "Failed to create new user!";

/// Sink for success/failure notifications
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Prints notifications for a terminal operator
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✔ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {}", message);
    }
}
