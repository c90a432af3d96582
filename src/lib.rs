#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]
#![allow(clippy::redundant_closure_for_method_calls)]

//! sharelinks library — builds email, Telegram and WhatsApp share links from
//! page state and writes them into the page's share anchors.
//!
//! - `encode` — `encodeURIComponent`-compatible percent-encoding
//! - `document` — `Document`/`Anchor` traits and the in-memory snapshot
//! - `page` — `PageContext` and description resolution
//! - `share` — the three link builders
//! - `init` — one-shot share buttons and the ready-hook registry
//! - `config` — TOML + env-var configuration
//! - `routes`, `state` — HTTP service (native targets)
//! - `web` — `web_sys` binding (wasm32)

pub mod config;
pub mod document;
pub mod encode;
pub mod error;
pub mod init;
pub mod page;
pub mod share;

#[cfg(not(target_arch = "wasm32"))]
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export key types at crate root for convenience.
pub use config::Config;
pub use document::{Anchor, Document, MetaTag, SnapshotDocument};
pub use error::{MissingTarget, ShareError};
pub use init::{initialize, InitReport, ReadyHooks, ShareButton};
pub use page::PageContext;
pub use share::{Platform, ShareLink, ShareLinks};
#[cfg(not(target_arch = "wasm32"))]
pub use state::AppState;
