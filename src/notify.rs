use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// Follow-up the user can trigger from a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Undo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub action: Option<Action>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            action: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            action: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.severity {
            Severity::Success => "✅",
            Severity::Info => "ℹ️ ",
            Severity::Error => "❌",
        };
        write!(f, "{} {}", icon, self.message)?;
        if let Some(Action::Undo) = self.action {
            write!(f, " (undo available)")?;
        }
        Ok(())
    }
}

/// Receives the user-facing messages raised by stores.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

pub type SharedNotifier = Arc<dyn Notifier + Send + Sync>;

/// Prints each notification as a toast line on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        println!("{notification}");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Error => log::warn!("{}", notification.message),
            Severity::Success | Severity::Info => log::info!("{}", notification.message),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification.clone());
        }
    }
}

/// Fans every notification out to each inner notifier in order.
#[derive(Clone, Default)]
pub struct Broadcast {
    targets: Vec<SharedNotifier>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: SharedNotifier) -> Self {
        self.targets.push(target);
        self
    }
}

impl Notifier for Broadcast {
    fn notify(&self, notification: &Notification) {
        for target in &self.targets {
            target.notify(notification);
        }
    }
}
