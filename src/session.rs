use crate::notify::{self, NotificationEntry};
use crate::types::UserData;

/// Mutable per-view state shared with async completions.
///
/// A service call resolves after an await point, and by then the view may
/// have moved on (navigated away, refreshed, switched users). Callers take an
/// epoch token when they issue a call and apply the result through
/// [`apply_if_current`](Session::apply_if_current); a completion issued
/// against an old epoch is rejected instead of overwriting newer state.
///
/// Two in-flight calls against the same epoch still race last-write-wins,
/// matching how the backing store behaves; the guard only protects against
/// writes from a generation the view has abandoned.
#[derive(Debug, Default)]
pub struct Session {
    epoch: u64,
    user_data: Option<UserData>,
    notifications: Vec<NotificationEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token identifying the state generation a request is issued against.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a new generation; results issued before this point become stale.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Apply `apply` only when `token` still names the current generation.
    /// Returns whether the update was applied.
    pub fn apply_if_current<F>(&mut self, token: u64, apply: F) -> bool
    where
        F: FnOnce(&mut Self),
    {
        if token != self.epoch {
            return false;
        }
        apply(self);
        true
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }

    pub fn set_user_data(&mut self, data: UserData) {
        self.user_data = Some(data);
    }

    pub fn notifications(&self) -> &[NotificationEntry] {
        &self.notifications
    }

    pub fn push_notification(&mut self, entry: NotificationEntry) {
        self.notifications.push(entry);
    }

    /// Dismiss a notification card; every entry with this id goes away.
    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifications = notify::remove(&self.notifications, id);
    }
}
