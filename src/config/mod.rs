pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig, WaitlistConfig};

/// Overrides `waitlist.base_url` when set.
pub const API_URL_ENV: &str = "LAUNCHPAD_API_URL";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("launchpad")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    let config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?
    } else {
        AppConfig::default()
    };
    Ok(apply_env_overrides(config, std::env::var(API_URL_ENV).ok()))
}

fn apply_env_overrides(mut config: AppConfig, api_url: Option<String>) -> AppConfig {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.waitlist.base_url = url.trim().to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_replaces_base_url() {
        let config = apply_env_overrides(
            AppConfig::default(),
            Some(" http://127.0.0.1:8001 ".to_string()),
        );
        assert_eq!(config.waitlist.base_url, "http://127.0.0.1:8001");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = apply_env_overrides(AppConfig::default(), Some("  ".to_string()));
        assert_eq!(config.waitlist.base_url, "http://localhost:8000");
        let config = apply_env_overrides(AppConfig::default(), None);
        assert_eq!(config.waitlist.base_url, "http://localhost:8000");
    }
}
