use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub submissions: SubmissionsConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for the REST API server
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    crate::rest::DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Optional seed file overriding the embedded dataset
    #[serde(default)]
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionsConfig {
    /// Spreadsheet webhook receiving accepted submissions. When unset,
    /// submissions are appended to `fallback_file` under the state dir.
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_fallback_file")]
    pub fallback_file: String,
}

fn default_fallback_file() -> String {
    "submissions.jsonl".to_string()
}

impl Default for SubmissionsConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            fallback_file: default_fallback_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// State directory for logs and fallback submission storage
    #[serde(default = "default_state_path")]
    pub state: String,
}

fn default_state_path() -> String {
    ".moltdex".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state: default_state_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether serve mode logs to file (false = stderr)
    #[serde(default)]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: false,
        }
    }
}

impl Config {
    /// Path to the project-local config file
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".moltdex/config.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so moltdex works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // Project-local config (primary config location)
        let local_config = Self::local_config_path();
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // User config in ~/.config/moltdex/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("moltdex").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with MOLTDEX_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("MOLTDEX")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Get absolute path to the state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to the logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }

    /// Where fallback submissions are appended
    pub fn submissions_fallback_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.submissions.fallback_file);
        if path.is_absolute() {
            path
        } else {
            self.state_path().join(path)
        }
    }

    /// Optional seed file overriding the embedded dataset
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.catalog.seed_path.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, crate::rest::DEFAULT_PORT);
        assert_eq!(config.logging.level, "info");
        assert!(config.submissions.webhook_url.is_none());
        assert!(config.catalog.seed_path.is_none());
    }

    #[test]
    fn test_logs_path_under_state() {
        let mut config = Config::default();
        config.paths.state = "/var/lib/moltdex".to_string();
        assert_eq!(config.logs_path(), PathBuf::from("/var/lib/moltdex/logs"));
    }

    #[test]
    fn test_submissions_fallback_relative_to_state() {
        let mut config = Config::default();
        config.paths.state = "/var/lib/moltdex".to_string();
        assert_eq!(
            config.submissions_fallback_path(),
            PathBuf::from("/var/lib/moltdex/submissions.jsonl")
        );
    }

    #[test]
    fn test_submissions_fallback_absolute_wins() {
        let mut config = Config::default();
        config.submissions.fallback_file = "/tmp/subs.jsonl".to_string();
        assert_eq!(
            config.submissions_fallback_path(),
            PathBuf::from("/tmp/subs.jsonl")
        );
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::default();
        config.server.port = 9000;
        config.submissions.webhook_url = Some("https://hooks.example/x".to_string());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(
            parsed.submissions.webhook_url.as_deref(),
            Some("https://hooks.example/x")
        );
    }
}
