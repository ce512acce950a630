use serde::Serialize;

use crate::error::ServiceError;
use crate::feed::FeedEntry;

/// One display refresh of the activity ticker.
#[derive(Debug, Serialize)]
pub struct FeedSnapshot<'a> {
    pub timestamp: String,
    pub rotation: u64,
    pub visible: &'a [FeedEntry],
}

impl<'a> FeedSnapshot<'a> {
    pub fn new(rotation: u64, visible: &'a [FeedEntry]) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            rotation,
            visible,
        }
    }
}

/// A failure surfaced to the user as a transient toast.
#[derive(Debug, Serialize)]
pub struct ToastEvent {
    pub timestamp: String,
    pub kind: String,
    pub message: String,
}

impl ToastEvent {
    pub fn from_error(err: &ServiceError) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: err.kind().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Emit a feed snapshot as a single JSON line to stdout.
pub fn report_feed(snapshot: &FeedSnapshot<'_>) {
    if let Ok(json) = serde_json::to_string(snapshot) {
        println!("{json}");
    }
}

/// Emit a toast event as a single JSON line to stdout.
pub fn report_toast(event: &ToastEvent) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}
