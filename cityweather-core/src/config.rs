use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_INITIAL_QUERY: &str = "jaffna";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// initial_query = "jaffna"
/// base_url = "https://api.openweathermap.org"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key. Not validated; requests without one fail upstream.
    pub api_key: Option<String>,

    /// City looked up once when the interactive widget starts.
    pub initial_query: String,

    pub base_url: String,

    /// Per-request timeout. Absent means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            initial_query: DEFAULT_INITIAL_QUERY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replace the stored API key when an override (flag or environment) is given.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// API key to send, empty when none is configured.
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openweather_and_jaffna() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.initial_query, "jaffna");
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.timeout(), None);
        assert_eq!(cfg.api_key_or_empty(), "");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml("api_key = \"KEY\"\ntimeout_secs = 5\n").unwrap();

        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(cfg.initial_query, DEFAULT_INITIAL_QUERY);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            initial_query: "colombo".into(),
            base_url: "http://localhost:8080".into(),
            timeout_secs: Some(3),
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(Config::from_toml("initial_query = 42").is_err());
    }

    #[test]
    fn api_key_override_replaces_stored_key() {
        let cfg = Config { api_key: Some("FILE".into()), ..Config::default() };

        let overridden = cfg.clone().with_api_key(Some("ENV".into()));
        assert_eq!(overridden.api_key.as_deref(), Some("ENV"));

        let untouched = cfg.clone().with_api_key(None);
        assert_eq!(untouched.api_key.as_deref(), Some("FILE"));

        let empty = cfg.with_api_key(Some(String::new()));
        assert_eq!(empty.api_key.as_deref(), Some("FILE"));
    }
}
