use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use colorbet_client::api;
use colorbet_client::config::{API_BASE_ENV, AppConfig, CONFIG_PATH};
use colorbet_client::feed::{self, FeedController};
use colorbet_client::notify::ToastStack;
use colorbet_client::reporter::{self, FeedSnapshot, ToastEvent};
use colorbet_client::seed;
use colorbet_client::service::ApiClient;
use colorbet_client::types::BetHistoryQuery;

#[derive(Parser)]
#[command(name = "activity-feed", about = "Live activity ticker for the colorbet backend")]
struct Args {
    /// Config file path
    #[arg(long, default_value = CONFIG_PATH)]
    config: String,

    /// Use the built-in demo feed instead of contacting the backend
    #[arg(long)]
    offline: bool,

    /// Stop after this many rotations (runs until Ctrl+C when omitted)
    #[arg(long)]
    rotations: Option<u64>,

    /// Override the rotation period in milliseconds
    #[arg(long)]
    period_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();

    if args.rotations == Some(0) {
        anyhow::bail!("--rotations must be positive");
    }
    if args.period_ms == Some(0) {
        anyhow::bail!("--period-ms must be positive");
    }

    let config = AppConfig::load_or_default(Path::new(&args.config))?;
    let period = match args.period_ms {
        Some(ms) => Duration::from_millis(ms),
        None => config.rotation_period(),
    };

    let mut toasts = ToastStack::new(config.toast_ttl());

    let entries = if args.offline {
        info!("Offline mode: using the built-in demo feed");
        seed::demo_feed()
    } else {
        let base = config.base_url(std::env::var(API_BASE_ENV).ok())?;
        info!("Using backend at {base}");
        let client = ApiClient::new(base);
        match api::fetch_bet_history(&client, &BetHistoryQuery::default()).await {
            Ok(records) => {
                let entries = feed::winning_entries(&records);
                if entries.is_empty() {
                    warn!("No winning bets in history; falling back to the demo feed");
                    seed::demo_feed()
                } else {
                    entries
                }
            }
            Err(e) => {
                warn!("Failed to fetch bet history: {e}");
                reporter::report_toast(&ToastEvent::from_error(&e));
                toasts.push_error(&e);
                seed::demo_feed()
            }
        }
    };

    info!(
        "Starting ticker with {} entries (period: {period:?}). Press Ctrl+C to stop.",
        entries.len()
    );
    let mut controller = FeedController::start(entries, period);
    let mut rx = controller.subscribe();

    if !controller.is_running() {
        info!("Fewer than two entries; the feed is static");
    }

    // The seed order is the first thing on screen.
    reporter::report_feed(&FeedSnapshot::new(0, &controller.visible()));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                toasts.sweep();
                let rotation = controller.rotations();
                let visible = rx.borrow_and_update().clone();
                reporter::report_feed(&FeedSnapshot::new(rotation, &visible));
                if args.rotations.is_some_and(|max| rotation >= max) {
                    info!("Reached {rotation} rotation(s)");
                    break;
                }
            }
        }
    }

    controller.stop();
    Ok(())
}
