#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sharelinks
//!
//! Builds email, Telegram and WhatsApp share links for a web page.
//!
//! ## Subcommands
//!
//! - `sharelinks serve` (default) — run the HTTP API
//! - `sharelinks links --url <url> --title <title>` — print share links
//! - `sharelinks apply [file]` — fire the share buttons on a JSON page snapshot
//!
//! ## API surface
//!
//! | Method | Path               | Description                               |
//! |--------|--------------------|-------------------------------------------|
//! | GET    | `/api/health`      | Liveness probe                            |
//! | GET    | `/api/share`       | Build share links from query parameters   |
//! | POST   | `/api/share/apply` | Fire the share buttons on a page snapshot |
//!
//! ## Architecture
//!
//! ```text
//! main.rs          — entry point, clap subcommands, router layers, graceful shutdown
//! config.rs        — TOML + env-var configuration
//! encode.rs        — encodeURIComponent-compatible escaping
//! document.rs      — Document/Anchor traits, SnapshotDocument
//! page.rs          — PageContext, description resolution
//! share/           — email, telegram, whatsapp link builders
//! init.rs          — ShareButton state machine, ReadyHooks
//! routes/
//!   health.rs      — GET /api/health
//!   share.rs       — GET /api/share, POST /api/share/apply
//! web.rs           — wasm32 binding over web_sys
//! ```

use std::io::Read;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use sharelinks::{
    routes, AppState, Config, PageContext, Platform, ShareLinks, SnapshotDocument,
};

/// Share-link builder for email, Telegram and WhatsApp.
#[derive(Parser)]
#[command(name = "sharelinks", version)]
struct Cli {
    /// Path to TOML config file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default when no subcommand given).
    Serve,
    /// Print share links for the given page state.
    Links(LinksArgs),
    /// Fire the share buttons on a JSON page snapshot and print the result.
    Apply {
        /// Snapshot file. Reads stdin when omitted or `-`.
        file: Option<String>,
    },
}

#[derive(Args)]
struct LinksArgs {
    /// Page URL.
    #[arg(long)]
    url: String,
    /// Page title.
    #[arg(long, default_value = "")]
    title: String,
    /// Content of `<meta name="description">`.
    #[arg(long)]
    description: Option<String>,
    /// Content of `<meta property="og:description">`.
    #[arg(long)]
    og_description: Option<String>,
    /// Only print this platform's link.
    #[arg(long)]
    platform: Option<Platform>,
    /// Print JSON instead of `platform<TAB>href` lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing; stdout is reserved for command output
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Links(args) => run_links(&args, &config),
        Commands::Apply { file } => run_apply(file.as_deref(), &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_links(args: &LinksArgs, config: &Config) -> Result<(), String> {
    println!("{}", links_output(args, config)?);
    Ok(())
}

/// Render `links` output: one `platform<TAB>href` line per platform, or a
/// pretty JSON object with `--json`.
fn links_output(args: &LinksArgs, config: &Config) -> Result<String, String> {
    let page = PageContext::from_parts(
        args.url.as_str(),
        args.title.as_str(),
        args.description.clone(),
        args.og_description.clone(),
    );
    let platforms = match args.platform {
        Some(p) => vec![p],
        None => config.share.platforms.clone(),
    };
    let links = ShareLinks::build(&page, &platforms);

    if args.json {
        return serde_json::to_string_pretty(&links).map_err(|e| e.to_string());
    }
    Ok(links
        .iter()
        .map(|(p, href)| format!("{p}\t{href}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn run_apply(file: Option<&str>, config: &Config) -> Result<(), String> {
    let doc = read_snapshot(file, std::io::stdin().lock())?;
    println!("{}", apply_output(doc, config)?);
    Ok(())
}

/// Parse a snapshot from `file`, or from `stdin` when `file` is omitted or `-`.
fn read_snapshot<R: Read>(file: Option<&str>, mut stdin: R) -> Result<SnapshotDocument, String> {
    let content = match file {
        None | Some("-") => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read snapshot {path}: {e}"))?,
    };
    serde_json::from_str(&content).map_err(|e| format!("Invalid snapshot: {e}"))
}

/// Fire the configured share buttons on `doc` and render the updated
/// document with the initialization report.
fn apply_output(mut doc: SnapshotDocument, config: &Config) -> Result<String, String> {
    let mut hooks = config.ready_hooks()?;
    let report = hooks.fire(&mut doc);
    serde_json::to_string_pretty(&json!({
        "document": doc,
        "report": report,
    }))
    .map_err(|e| e.to_string())
}

async fn run_server(config: Config) -> Result<(), String> {
    info!("sharelinks v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}", config.server.listen);

    let max_connections = config.server.max_connections.max(1);
    let state = AppState::new(config);

    let app = routes::router(state.clone())
        .layer(ConcurrencyLimitLayer::new(max_connections))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&state.config.server.listen)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", state.config.server.listen))?;

    info!("Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {e}"))?;

    info!("Goodbye");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received SIGINT"),
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                }
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {e}");
                ctrl_c.await.ok();
                info!("Received SIGINT");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received SIGINT");
    }
}
