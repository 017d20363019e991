//! Server and task store configuration.
//!
//! Layering: built-in defaults, then an optional TOML file, then
//! `TASKTRACKER_*` environment variables. The binary applies CLI flags last.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "TASKTRACKER_";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("store backend 'postgrest' requires store.url")]
    MissingStoreUrl,
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1:3000")
    pub bind_address: String,
    /// Allowed CORS origin; `*` allows any origin
    pub cors_origin: String,
    /// Directory holding the compiled web UI
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            cors_origin: "*".to_string(),
            static_dir: PathBuf::from("crates/tasktracker-ui/dist"),
        }
    }
}

/// Which task store implementation to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local rows, lost on restart.
    #[default]
    Memory,
    /// A PostgREST-compatible endpoint (e.g. Supabase).
    Postgrest,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Postgrest => write!(f, "postgrest"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgrest" | "supabase" => Ok(Self::Postgrest),
            _ => Err(ConfigError::InvalidValue {
                key: "store.backend".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Task store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Base URL of the PostgREST service (without `/rest/v1`).
    #[serde(default)]
    pub url: Option<Url>,

    /// API key sent as `apikey` and bearer token.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Table holding task rows.
    #[serde(default = "default_table")]
    pub table: String,

    /// Timeout for each store request.
    #[serde(with = "duration_secs", default = "default_timeout")]
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: None,
            api_key: None,
            table: default_table(),
            timeout: default_timeout(),
        }
    }
}

impl StoreConfig {
    /// Config for a PostgREST endpoint.
    #[must_use]
    pub fn postgrest(url: Url) -> Self {
        Self {
            backend: StoreBackend::Postgrest,
            url: Some(url),
            ..Default::default()
        }
    }

    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl AppConfig {
    /// Load defaults, an optional file, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// environment variable holds an invalid value.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `TASKTRACKER_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value that does not parse.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(addr) = var("BIND_ADDRESS") {
            self.server.bind_address = addr;
        }
        if let Some(origin) = var("CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }
        if let Some(dir) = var("STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(backend) = var("STORE_BACKEND") {
            self.store.backend = backend.parse()?;
        }
        if let Some(url) = var("STORE_URL") {
            self.store.url = Some(url.parse().map_err(|_| ConfigError::InvalidValue {
                key: format!("{ENV_PREFIX}STORE_URL"),
                value: url.clone(),
            })?);
        }
        if let Some(key) = var("STORE_API_KEY") {
            self.store.api_key = Some(key);
        }
        if let Some(table) = var("STORE_TABLE") {
            self.store.table = table;
        }
        if let Some(secs) = var("STORE_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: format!("{ENV_PREFIX}STORE_TIMEOUT_SECS"),
                value: secs.clone(),
            })?;
            self.store.timeout = Duration::from_secs(secs);
        }

        Ok(self)
    }

    /// Check cross-field requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingStoreUrl`] for a PostgREST backend
    /// without a URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.store.backend, &self.store.url) {
            (StoreBackend::Postgrest, None) => Err(ConfigError::MissingStoreUrl),
            _ => Ok(()),
        }
    }

    /// Render as TOML with the API key masked.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let mut shown = self.clone();
        if shown.store.api_key.is_some() {
            shown.store.api_key = Some("********".to_string());
        }
        Ok(toml::to_string_pretty(&shown)?)
    }
}

fn default_table() -> String {
    "tasks".to_string()
}

const fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Serialization helper for Duration as seconds.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.server.cors_origin, "*");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.table, "tasks");
        assert_eq!(config.store.timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            backend = "postgrest"
            url = "https://example.supabase.co"
            timeout = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.store.backend, StoreBackend::Postgrest);
        assert_eq!(config.store.table, "tasks");
        assert_eq!(config.store.timeout, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgrest_without_url_is_rejected() {
        let config = AppConfig::from_toml("[store]\nbackend = \"postgrest\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingStoreUrl)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TASKTRACKER_BIND_ADDRESS", "0.0.0.0:8080"),
            ("TASKTRACKER_STORE_BACKEND", "supabase"),
            ("TASKTRACKER_STORE_URL", "https://db.example.com"),
            ("TASKTRACKER_STORE_API_KEY", "secret"),
            ("TASKTRACKER_STORE_TIMEOUT_SECS", "2"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default()
            .with_env_overrides(|key| env.get(key).map(ToString::to_string))
            .unwrap();

        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.store.backend, StoreBackend::Postgrest);
        assert_eq!(
            config.store.url.as_ref().map(Url::as_str),
            Some("https://db.example.com/")
        );
        assert_eq!(config.store.api_key.as_deref(), Some("secret"));
        assert_eq!(config.store.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_env_value() {
        let result = AppConfig::default().with_env_overrides(|key| {
            (key == "TASKTRACKER_STORE_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasktracker.toml");
        std::fs::write(&path, "[server]\nbind_address = \"127.0.0.1:4000\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:4000");

        let missing = AppConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_redacted_toml_masks_api_key() {
        let mut config = AppConfig::default();
        config.store.api_key = Some("secret".to_string());

        let rendered = config.to_redacted_toml().unwrap();
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("********"));
    }
}
