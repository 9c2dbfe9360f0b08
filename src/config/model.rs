//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub waitlist: WaitlistConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how signups are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistConfig {
    /// Backend origin, e.g. `http://localhost:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_submit_path")]
    pub submit_path: String,
    #[serde(default = "default_count_path")]
    pub count_path: String,
    /// Per-request timeout. Unset means wait for the backend indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Show the signup counter in the status bar.
    #[serde(default = "default_true")]
    pub show_count: bool,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
            count_path: default_count_path(),
            request_timeout_secs: None,
            show_count: true,
        }
    }
}

/// Benefits carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            autoplay: true,
        }
    }
}

/// UI refresh and input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_submit_path() -> String {
    "/api/waitlist".to_string()
}
fn default_count_path() -> String {
    "/api/waitlist/count".to_string()
}
fn default_interval_secs() -> u64 {
    10
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_dir() -> String {
    "~/.local/share/launchpad/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
