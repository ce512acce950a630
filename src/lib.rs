use std::time::Duration;

pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod feed;
pub mod notify;
pub mod reporter;
pub mod seed;
pub mod service;
pub mod session;
pub mod types;

/// Default backend API base URL (overridden by `config.toml` or the
/// `COLORBET_API_BASE` environment variable).
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Default interval between feed rotations.
pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_millis(3000);

/// Number of feed entries exposed to the display layer at any time.
pub const VISIBLE_WINDOW: usize = 5;

/// How long a failure toast stays visible before auto-expiring.
pub const TOAST_TTL: Duration = Duration::from_secs(3);
