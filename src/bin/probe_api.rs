//! Probe: backend API surface
//!
//! Hits the user and bet-history endpoints and documents:
//! - Envelope shape and fields
//! - Error envelope on a bogus request
//! - Latency over multiple requests

use std::time::Instant;

use anyhow::Result;
use serde_json::{Value, json};

use colorbet_client::config::{API_BASE_ENV, AppConfig};
use colorbet_client::service::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::default();
    let base = config.base_url(std::env::var(API_BASE_ENV).ok())?;
    let client = ApiClient::new(base.clone());

    println!("=== Probe: backend API ===");
    println!("Base: {base}");
    println!();

    // 1. Fetch all users
    println!("--- 1. GET /api/user/allusers ---");
    let start = Instant::now();
    match client.get("/api/user/allusers").await {
        Ok(body) => {
            println!("Latency: {:?}", start.elapsed());
            if let Some(obj) = body.as_object() {
                println!("Envelope fields:");
                for key in obj.keys() {
                    println!("  - {key}");
                }
            }
            if let Some(arr) = body.get("data").and_then(Value::as_array) {
                println!("User count: {}", arr.len());
                if let Some(first) = arr.first() {
                    println!("\nSample user (first):");
                    println!("{}", serde_json::to_string_pretty(first)?);
                }
            }
        }
        Err(e) => println!("Failed ({}): {e}", e.kind()),
    }
    println!();

    // 2. Bet history, first page
    println!("--- 2. POST /api/color/bet-history (page 1) ---");
    let start = Instant::now();
    match client
        .post("/api/color/bet-history", &json!({"page": 1, "pageSize": 5}))
        .await
    {
        Ok(body) => {
            println!("Latency: {:?}", start.elapsed());
            let count = body
                .get("data")
                .and_then(Value::as_array)
                .map(|a| a.len())
                .unwrap_or(0);
            println!("Returned {count} record(s)");
        }
        Err(e) => println!("Failed ({}): {e}", e.kind()),
    }
    println!();

    // 3. Error envelope shape
    println!("--- 3. PUT /api/user/user/0 (expect error envelope) ---");
    match client
        .put("/api/user/user/0", &json!({"phone": "not-a-phone"}))
        .await
    {
        Ok(body) => println!(
            "Unexpected success:\n{}",
            serde_json::to_string_pretty(&body)?
        ),
        Err(e) => println!("Failure kind={} message={:?}", e.kind(), e.message()),
    }
    println!();

    // 4. Latency over 5 requests
    println!("--- 4. Latency over 5 requests ---");
    let mut latencies = Vec::new();
    for i in 0..5 {
        let start = Instant::now();
        let _ = client.get("/api/user/allusers").await;
        let latency = start.elapsed();
        println!("  Request {}: {:?}", i + 1, latency);
        latencies.push(latency);
    }
    let avg = latencies.iter().sum::<std::time::Duration>() / latencies.len() as u32;
    println!("  Average: {avg:?}");
    println!();

    println!("=== Probe complete ===");
    Ok(())
}
