use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

// =============================================================================
// Upstream endpoints
// =============================================================================

/// Default CPAN distribution search endpoint
pub const DEFAULT_CPAN_API_URL: &str = "http://search.cpan.org/api/dist";

/// Default root of the CPAN authors directory
pub const DEFAULT_CPAN_ARCHIVE_ROOT: &str = "http://search.cpan.org/CPAN/authors/id";

// =============================================================================
// HTTP defaults
// =============================================================================

/// Default request timeout in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("cuppa/", env!("CARGO_PKG_VERSION"));

/// Default log level when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CuppaConfig {
    pub http: HttpConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

/// Settings for the HTTP client shared by all providers
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfig {
    /// Request timeout in milliseconds, `null` for no timeout
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub cpan: CpanConfig,
}

/// CPAN provider configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CpanConfig {
    pub enabled: bool,
    pub api_url: Url,
    pub archive_root: Url,
}

impl Default for CpanConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: Url::parse(DEFAULT_CPAN_API_URL).expect("default CPAN API URL is valid"),
            archive_root: Url::parse(DEFAULT_CPAN_ARCHIVE_ROOT)
                .expect("default CPAN archive root is valid"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    pub level: String,
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
            json: false,
        }
    }
}

impl CuppaConfig {
    /// Reads and parses the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads an explicitly given config file, or the default one if it exists.
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = config_path();
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the path to the config directory for cuppa.
/// Uses $XDG_CONFIG_HOME/cuppa if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/cuppa,
/// or ./cuppa if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("cuppa")
}
