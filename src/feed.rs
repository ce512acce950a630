use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::VISIBLE_WINDOW;
use crate::currency;
use crate::types::BetRecord;

/// One row in the live activity display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: u64,
    pub display_name: String,
    /// Pre-formatted currency string, e.g. `₹1,250.00`.
    pub amount: String,
    pub avatar_url: String,
    pub status_label: String,
    pub action_label: String,
}

/// Ordered feed entries. Rotation moves the last entry to the front and
/// shifts the rest right; it reorders, never adds or drops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    entries: Vec<FeedEntry>,
}

impl FeedState {
    pub fn new(entries: Vec<FeedEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// Move the last entry to the front. No-op when there are fewer than two
    /// entries.
    pub fn rotate(&mut self) {
        if self.entries.len() > 1 {
            if let Some(last) = self.entries.pop() {
                self.entries.insert(0, last);
            }
        }
    }

    /// The first [`VISIBLE_WINDOW`] entries in display order, capped at the
    /// sequence length.
    pub fn visible(&self) -> &[FeedEntry] {
        let k = VISIBLE_WINDOW.min(self.entries.len());
        &self.entries[..k]
    }
}

struct Rotor {
    feed: FeedState,
    rotations: u64,
    stopped: bool,
}

struct Shared {
    state: Mutex<Rotor>,
    tx: watch::Sender<Vec<FeedEntry>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Rotor> {
        self.state.lock().expect("feed state lock poisoned")
    }

    /// Perform one rotation and publish the new visible window.
    ///
    /// Returns false once the controller has been stopped. The stop flag is
    /// read under the same lock that guards the rotation, so a stopped feed
    /// can never rotate or publish again.
    fn rotate_once(&self) -> bool {
        let mut rotor = self.lock();
        if rotor.stopped {
            return false;
        }
        rotor.feed.rotate();
        rotor.rotations += 1;
        let visible = rotor.feed.visible().to_vec();
        self.tx.send_replace(visible);
        true
    }
}

/// Owns the rotation timer for one mounted feed view.
///
/// Exactly one timer task runs per controller. [`FeedController::stop`] (or
/// dropping the controller) cancels it; once `stop` returns, no further
/// rotation is observable through [`visible`](FeedController::visible) or any
/// subscriber.
pub struct FeedController {
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
}

impl FeedController {
    /// Begin rotating `seed` every `period`. The seed order is displayed
    /// as-is until one full period has elapsed.
    ///
    /// Sequences with fewer than two entries never change, so no timer task
    /// is spawned for them. Must be called from within a tokio runtime when a
    /// timer is needed.
    pub fn start(seed: Vec<FeedEntry>, period: Duration) -> Self {
        let feed = FeedState::new(seed);
        let needs_timer = feed.len() > 1;
        let (tx, _) = watch::channel(feed.visible().to_vec());
        let shared = Arc::new(Shared {
            state: Mutex::new(Rotor {
                feed,
                rotations: 0,
                stopped: false,
            }),
            tx,
        });

        let task = if needs_timer {
            let shared = Arc::clone(&shared);
            Some(tokio::spawn(async move {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first tick completes immediately; consume it so the
                // first rotation lands one full period after start.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    if !shared.rotate_once() {
                        break;
                    }
                }
            }))
        } else {
            None
        };

        debug!("Feed controller started (period: {period:?})");
        Self { shared, task }
    }

    /// Snapshot of the current visible window.
    pub fn visible(&self) -> Vec<FeedEntry> {
        self.shared.lock().feed.visible().to_vec()
    }

    /// Rotations performed since start.
    pub fn rotations(&self) -> u64 {
        self.shared.lock().rotations
    }

    /// Subscribe to visible-window updates; one value per rotation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<FeedEntry>> {
        self.shared.tx.subscribe()
    }

    /// Whether the rotation timer is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the rotation timer. Idempotent; after this returns no further
    /// state transition occurs.
    pub fn stop(&mut self) {
        self.shared.lock().stopped = true;
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Map winning bet records onto feed entries for the live ticker.
pub fn winning_entries(records: &[BetRecord]) -> Vec<FeedEntry> {
    records
        .iter()
        .filter(|record| record.is_win())
        .map(|record| FeedEntry {
            id: record.id,
            display_name: record.user_name.clone(),
            amount: currency::format_inr(record.payout),
            avatar_url: record.avatar_url.clone(),
            status_label: "Successful".to_string(),
            action_label: "Won".to_string(),
        })
        .collect()
}
