use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::error::ServiceError;

/// One card in the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEntry {
    pub id: u64,
    pub title: String,
    /// Display timestamp as produced by the backend or seed data.
    pub timestamp: String,
    pub message: String,
}

/// Drop every entry carrying `id`, preserving the order of the rest.
///
/// Seed data is known to repeat ids; dismissal removes all of them rather
/// than the first hit, which keeps this idempotent.
pub fn remove(list: &[NotificationEntry], id: u64) -> Vec<NotificationEntry> {
    list.iter()
        .filter(|entry| entry.id != id)
        .cloned()
        .collect()
}

/// A transient failure banner with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub raised_at: Instant,
}

/// Holds live toasts and expires them `ttl` after they were raised.
///
/// Expiry is pull-based: callers `sweep` before reading `active`, typically
/// once per display refresh.
#[derive(Debug)]
pub struct ToastStack {
    ttl: Duration,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            raised_at: Instant::now(),
        });
    }

    /// Raise a toast for a failed service call, carrying its message string.
    pub fn push_error(&mut self, err: &ServiceError) {
        self.push(err.message());
    }

    /// Drop every toast older than the TTL.
    pub fn sweep(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| toast.raised_at.elapsed() < ttl);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64, title: &str) -> NotificationEntry {
        NotificationEntry {
            id,
            title: title.to_string(),
            timestamp: "2026-02-01T09:30:00Z".to_string(),
            message: format!("{title} details"),
        }
    }

    // ── remove ─────────────────────────────────────────────────────

    #[test]
    fn remove_drops_every_matching_id() {
        // Duplicate ids, as in the shipped seed data.
        let list = vec![note(1, "Bonus"), note(2, "Deposit"), note(1, "Bonus copy")];
        let remaining = remove(&list, 1);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn remove_preserves_survivor_order() {
        let list = vec![note(3, "A"), note(1, "B"), note(4, "C"), note(1, "D")];
        let remaining = remove(&list, 1);
        assert_eq!(
            remaining.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
            ["A", "C"]
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let list = vec![note(1, "A"), note(2, "B"), note(1, "C")];
        let once = remove(&list, 1);
        let twice = remove(&once, 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_never_grows_the_list() {
        let list = vec![note(1, "A"), note(2, "B")];
        assert!(remove(&list, 9).len() <= list.len());
        assert_eq!(remove(&list, 9), list);
    }

    #[test]
    fn remove_on_empty_list_is_empty() {
        assert!(remove(&[], 1).is_empty());
    }

    // ── ToastStack ─────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn toast_survives_until_ttl() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push("invalid phone");

        tokio::time::sleep(Duration::from_secs(2)).await;
        stack.sweep();
        assert_eq!(stack.active().len(), 1);
        assert_eq!(stack.active()[0].message, "invalid phone");
    }

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_ttl() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push("invalid phone");

        tokio::time::sleep(Duration::from_secs(4)).await;
        stack.sweep();
        assert!(stack.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_toasts_outlive_older_ones() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push("first");
        tokio::time::sleep(Duration::from_secs(2)).await;
        stack.push("second");
        tokio::time::sleep(Duration::from_secs(2)).await;

        stack.sweep();
        assert_eq!(stack.active().len(), 1);
        assert_eq!(stack.active()[0].message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn push_error_carries_the_failure_message() {
        let mut stack = ToastStack::new(Duration::from_secs(3));
        stack.push_error(&ServiceError::Api("invalid phone".into()));
        assert_eq!(stack.active()[0].message, "invalid phone");
    }
}
