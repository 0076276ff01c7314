// Toast reporting.
// Failures and confirmations surface as a transient banner that dismisses
// itself after a few seconds.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Severity of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

/// A transient banner message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    /// Report a failed operation: "<operation>失败：<message>".
    pub fn failure(operation: &str, error: &impl std::fmt::Display) -> Self {
        Self {
            level: ToastLevel::Error,
            message: format!("{}失败：{}", operation, error),
            shown_at: Instant::now(),
        }
    }

    /// Report a successful operation.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Whether the banner has outlived its display window.
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}
