//! HTTP route handlers.
//!
//! | Method | Path               | Description                               |
//! |--------|--------------------|-------------------------------------------|
//! | GET    | `/api/health`      | Liveness probe                            |
//! | GET    | `/api/share`       | Build share links from query parameters   |
//! | POST   | `/api/share/apply` | Fire the share buttons on a page snapshot |

pub mod health;
pub mod share;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Build the API router. Tracing, CORS and concurrency layers are added by
/// the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/share", get(share::share_links))
        .route("/api/share/apply", post(share::apply))
        .with_state(state)
}
