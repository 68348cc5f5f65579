/*
 * Responsibility
 * - 一時的な通知 (info / success / error) のスタック
 * - 新しいものが先頭。5 秒で自動的に消える
 * - 重複排除・上限なし
 */
use std::fmt;
use std::time::{Duration, Instant};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "info-circle",
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Success => "✓",
            Severity::Error => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn expires_at(&self) -> Instant {
        self.created_at + NOTIFICATION_TTL
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.marker(), self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    // newest first
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.push_at(severity, message, Instant::now());
    }

    pub fn push_at(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match severity {
            Severity::Error => tracing::info!(%message, "error notification"),
            _ => tracing::debug!(?severity, %message, "notification"),
        }
        self.items.insert(
            0,
            Notification {
                severity,
                message,
                created_at: now,
            },
        );
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// Notifications still visible at `now`, newest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.is_expired(now))
    }

    /// Drop expired notifications; returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
