//! Configuration loading and defaults.
//!
//! Configuration is resolved in order of precedence (highest wins):
//!
//! 1. **Environment variables**: `SHARELINKS_LISTEN`
//! 2. **Config file**: path via `--config <path>`, or `sharelinks.toml` in CWD
//! 3. **Compiled defaults**: see each field's default value below
//!
//! The TOML file mirrors the struct hierarchy:
//!
//! ```toml
//! [server]
//! listen = "127.0.0.1:8080"
//! max_connections = 64
//!
//! [share]
//! platforms = ["email", "telegram", "whatsapp"]
//!
//! [targets]
//! email = "mail-share-btt"
//! telegram = "telegram-share-btt"
//! whatsapp = "whatsapp-share-btt"
//!
//! [logging]
//! level = "info"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::init::ReadyHooks;
use crate::share::Platform;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sharelinks.toml";

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings for `sharelinks serve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default `127.0.0.1:8080`).
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Maximum requests served concurrently (default 64).
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

/// Which share buttons are registered.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Platforms to build links for (default: all three).
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,
}

/// Anchor element id each platform writes its link to.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_email_target")]
    pub email: String,
    #[serde(default = "default_telegram_target")]
    pub telegram: String,
    #[serde(default = "default_whatsapp_target")]
    pub whatsapp: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter level (default `info`). Overridden by `RUST_LOG` env var.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}
fn default_max_connections() -> usize {
    64
}
fn default_platforms() -> Vec<Platform> {
    Platform::ALL.to_vec()
}
fn default_email_target() -> String {
    Platform::Email.default_target().to_string()
}
fn default_telegram_target() -> String {
    Platform::Telegram.default_target().to_string()
}
fn default_whatsapp_target() -> String {
    Platform::WhatsApp.default_target().to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
        }
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            email: default_email_target(),
            telegram: default_telegram_target(),
            whatsapp: default_whatsapp_target(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TargetsConfig {
    /// Anchor id configured for `platform`.
    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Email => &self.email,
            Platform::Telegram => &self.telegram,
            Platform::WhatsApp => &self.whatsapp,
        }
    }
}

impl Config {
    /// Load configuration with the precedence chain: env vars > file > defaults.
    ///
    /// If `path` is `Some`, reads that file. Otherwise looks for
    /// `sharelinks.toml` in the current directory, falling back to compiled
    /// defaults.
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        let mut config = if let Some(p) = path {
            Self::from_file(Path::new(p))?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        } else {
            Config::default()
        };

        // Env var overrides
        if let Ok(listen) = std::env::var("SHARELINKS_LISTEN") {
            config.server.listen = listen;
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        Self::parse(&content)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))
    }

    /// Parse a TOML document. Does not apply env overrides or validation.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Check that all three anchor ids are non-empty and pairwise distinct,
    /// whether or not their platform is enabled, and that no platform is
    /// listed twice.
    pub fn validate(&self) -> Result<(), String> {
        for (i, &platform) in Platform::ALL.iter().enumerate() {
            let target = self.targets.for_platform(platform);
            if target.is_empty() {
                return Err(format!("targets.{platform} must not be empty"));
            }
            if let Some(other) = Platform::ALL[..i]
                .iter()
                .find(|&&p| self.targets.for_platform(p) == target)
            {
                return Err(format!(
                    "targets.{other} and targets.{platform} both use anchor '{target}'"
                ));
            }
        }
        self.ready_hooks().map(|_| ())
    }

    /// Ready hooks for the configured platforms and anchor ids.
    pub fn ready_hooks(&self) -> Result<ReadyHooks, String> {
        let mut hooks = ReadyHooks::new();
        for &platform in &self.share.platforms {
            let target = self.targets.for_platform(platform);
            if target.is_empty() {
                return Err(format!("targets.{platform} must not be empty"));
            }
            hooks
                .register(platform, target)
                .map_err(|e| format!("Invalid share configuration: {e}"))?;
        }
        Ok(hooks)
    }
}
