//! Share-link endpoints.
//!
//! - `GET /api/share?url=...&title=...` — build links from query parameters
//! - `POST /api/share/apply` — fire the ready hooks on a document snapshot

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::document::SnapshotDocument;
use crate::page::PageContext;
use crate::share::{Platform, ShareLinks};
use crate::AppState;

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": msg.into() })))
}

/// Query parameters for `GET /api/share`.
#[derive(Deserialize)]
pub struct ShareQuery {
    /// Page URL. Required.
    pub url: Option<String>,
    /// Page title. Defaults to empty.
    #[serde(default)]
    pub title: String,
    /// `<meta name="description">` content.
    pub description: Option<String>,
    /// `<meta property="og:description">` content.
    pub og_description: Option<String>,
    /// Restrict the response to one platform.
    pub platform: Option<String>,
}

/// `GET /api/share` — build share links for the given page state.
///
/// Returns `{"links": {"email": ..., "telegram": ..., "whatsapp": ...}}` with
/// one entry per enabled platform, or `{"platform": ..., "href": ...}` when
/// `platform` is given.
///
/// # Error responses
///
/// - `400 Bad Request` — `url` missing or empty, or unknown `platform`
/// - `404 Not Found` — `platform` is known but not enabled in the config
pub async fn share_links(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Result<Json<Value>, ApiError> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing 'url' parameter"))?;

    let page = PageContext::from_parts(url, query.title, query.description, query.og_description);
    let enabled = &state.config.share.platforms;

    if let Some(name) = query.platform.as_deref() {
        let platform: Platform = name
            .parse()
            .map_err(|e: String| api_error(StatusCode::BAD_REQUEST, e))?;
        if !enabled.contains(&platform) {
            return Err(api_error(
                StatusCode::NOT_FOUND,
                format!("Platform '{platform}' is not enabled"),
            ));
        }
        state.stats.record_built(1);
        return Ok(Json(json!({
            "platform": platform,
            "href": platform.build(&page),
        })));
    }

    let links = ShareLinks::build(&page, enabled);
    state.stats.record_built(links.len());
    debug!(url = %page.url, count = links.len(), "share links built");

    Ok(Json(json!({ "links": links })))
}

/// `POST /api/share/apply` — run the configured share buttons on a snapshot.
///
/// Body is a [`SnapshotDocument`]. Returns the snapshot with `href`s written
/// and the initialization report. Missing anchors are reported, not errors.
pub async fn apply(
    State(state): State<AppState>,
    Json(mut doc): Json<SnapshotDocument>,
) -> Result<Json<Value>, ApiError> {
    let mut hooks = state
        .config
        .ready_hooks()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    let report = hooks.fire(&mut doc);
    state.stats.record_built(report.assigned.len());
    state.stats.record_missing(report.missing.len());
    if !report.missing.is_empty() {
        warn!(
            url = %doc.url,
            missing = report.missing.len(),
            "snapshot is missing share anchors"
        );
    }

    Ok(Json(json!({
        "document": doc,
        "report": report,
    })))
}
