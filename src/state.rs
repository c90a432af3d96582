//! Shared application state passed to every handler via Axum's `State` extractor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Shared application state for the sharelinks server.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Arc<Config>,
    /// Monotonic instant when the server started (for uptime calculation).
    pub start_time: Instant,
    /// Link counters reported by `/api/health`.
    pub stats: Arc<ShareStats>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            stats: Arc::new(ShareStats::default()),
        }
    }
}

/// Lock-free counters updated by the share handlers.
#[derive(Debug, Default)]
pub struct ShareStats {
    /// Share links built since startup.
    pub links_built: AtomicU64,
    /// Builders skipped because their anchor was missing from a snapshot.
    pub missing_targets: AtomicU64,
}

impl ShareStats {
    pub fn record_built(&self, n: usize) {
        self.links_built.fetch_add(n as u64, Ordering::Relaxed);
    }

    pub fn record_missing(&self, n: usize) {
        self.missing_targets.fetch_add(n as u64, Ordering::Relaxed);
    }
}
