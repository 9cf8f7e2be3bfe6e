// src/config.rs
//! Runtime configuration: environment selection, optional config.yaml, env overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::core::{FileProfileStore, ServiceClient};

pub const CONFIG_FILE: &str = "config.yaml";
const PROFILE_FILE: &str = "profile.json";
const SESSIONS_DIR: &str = "sessions";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    /// No timeout unless configured
    pub timeout_seconds: Option<u64>,
    /// Mount the admin listing in the web front end
    pub admin_enabled: bool,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            data_dir: PathBuf::from("data"),
            timeout_seconds: None,
            admin_enabled: false,
            port: 8000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<AppConfig>,
    #[serde(default)]
    production: Option<AppConfig>,
}

impl AppConfig {
    /// Load configuration for the current environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let base_dir = if environment == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        Self::load_from(&base_dir, &environment, |key| std::env::var(key).ok())
    }

    /// Load from `base_dir/config.yaml` if present, then apply overrides read through `env`
    pub fn load_from<F>(base_dir: &Path, environment: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = base_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let file: ConfigFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;

            let section = match environment {
                "production" => file.production,
                _ => file.local,
            };
            section.unwrap_or_default()
        } else {
            Self::default()
        };

        config.apply_overrides(env)?;
        config.data_dir = resolve_path(base_dir, &config.data_dir);
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("CAREER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn apply_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("CAREER_API_URL") {
            self.api_base_url = url;
        }
        if let Some(dir) = env("CAREER_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = env("CAREER_ADMIN_ENABLED") {
            self.admin_enabled = parse_flag(&flag)
                .with_context(|| format!("CAREER_ADMIN_ENABLED must be a boolean, got {}", flag))?;
        }
        if let Some(seconds) = env("CAREER_TIMEOUT_SECONDS") {
            self.timeout_seconds = Some(
                seconds
                    .parse()
                    .context("CAREER_TIMEOUT_SECONDS must be a whole number of seconds")?,
            );
        }
        if let Some(port) = env("CAREER_PORT") {
            self.port = port.parse().context("CAREER_PORT must be a valid port number")?;
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }

    /// Server-side profiles of web sessions, one file per session id
    pub fn sessions_dir(&self) -> PathBuf {
        self.data_dir.join(SESSIONS_DIR)
    }

    pub fn profile_store(&self) -> FileProfileStore {
        FileProfileStore::new(self.profile_path())
    }

    pub fn service_client(&self) -> Result<ServiceClient> {
        ServiceClient::new(self.api_base_url.clone(), self.timeout())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path(), "local", no_env).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.data_dir, dir.path().join("data"));
        assert_eq!(config.timeout(), None);
        assert!(!config.admin_enabled);
        assert_eq!(config.profile_path(), dir.path().join("data").join("profile.json"));
        assert_eq!(config.sessions_dir(), dir.path().join("data").join("sessions"));
    }

    #[test]
    fn test_environment_section_is_selected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
local:
  api_base_url: http://127.0.0.1:5000
production:
  api_base_url: https://careers.example.org
  data_dir: /var/lib/career-compass
  timeout_seconds: 30
  admin_enabled: true
"#,
        )
        .unwrap();

        let local = AppConfig::load_from(dir.path(), "local", no_env).unwrap();
        assert_eq!(local.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(local.port, 8000);

        let production = AppConfig::load_from(dir.path(), "production", no_env).unwrap();
        assert_eq!(production.api_base_url, "https://careers.example.org");
        assert_eq!(production.data_dir, PathBuf::from("/var/lib/career-compass"));
        assert_eq!(production.timeout(), Some(Duration::from_secs(30)));
        assert!(production.admin_enabled);
    }

    #[test]
    fn test_env_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let vars: HashMap<&str, &str> = [
            ("CAREER_API_URL", "http://api:9000"),
            ("CAREER_ADMIN_ENABLED", "yes"),
            ("CAREER_PORT", "8080"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::load_from(dir.path(), "local", |key| {
            vars.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.api_base_url, "http://api:9000");
        assert!(config.admin_enabled);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(dir.path(), "local", |key| {
            (key == "CAREER_ADMIN_ENABLED").then(|| "maybe".to_string())
        });
        assert!(result.is_err());
    }
}
