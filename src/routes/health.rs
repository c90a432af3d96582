//! Health-check endpoint.

use std::sync::atomic::Ordering;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// `GET /api/health` — liveness probe.
///
/// Returns status, uptime, version, enabled platforms and link counters.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let uptime = state.start_time.elapsed().as_secs();
    let platforms: Vec<&str> = state
        .config
        .share
        .platforms
        .iter()
        .map(|p| p.as_str())
        .collect();

    Json(json!({
        "status": "ok",
        "uptime_secs": uptime,
        "version": env!("CARGO_PKG_VERSION"),
        "platforms": platforms,
        "links_built": state.stats.links_built.load(Ordering::Relaxed),
        "missing_targets": state.stats.missing_targets.load(Ordering::Relaxed),
    }))
}
