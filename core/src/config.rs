//! User configuration, read from `$CATALOG_HOME/config.toml`.

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use catalog_protocol::ResourceType;
use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

pub const CONFIG_TOML_FILE: &str = "config.toml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const CATALOG_HOME_ENV: &str = "CATALOG_HOME";
pub const BASE_URL_ENV: &str = "CATALOG_BASE_URL";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_INLINE_DEBOUNCE_MS: u64 = 350;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory; set {CATALOG_HOME_ENV}")]
    NoHome,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Resources searched by "search all" and inline search. Others always
    /// come back as empty buckets.
    pub resources: Vec<ResourceType>,
    pub inline_debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            resources: ResourceType::iter().collect(),
            inline_debounce_ms: DEFAULT_INLINE_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    pub fn is_enabled(&self, resource: ResourceType) -> bool {
        self.resources.contains(&resource)
    }

    pub fn inline_debounce(&self) -> Duration {
        Duration::from_millis(self.inline_debounce_ms)
    }
}

impl Config {
    /// Loads `path`, or `config.toml` under the catalog home when no path is
    /// given. A missing default file yields the defaults; a missing explicit
    /// file is an error. `CATALOG_BASE_URL` overrides the backend URL.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = find_catalog_home()?.join(CONFIG_TOML_FILE);
                match std::fs::read_to_string(&path) {
                    Ok(contents) => Self::parse(&contents, &path)?,
                    Err(err) if err.kind() == ErrorKind::NotFound => Self::default(),
                    Err(source) => return Err(ConfigError::Read { path, source }),
                }
            }
        };
        if let Ok(base_url) = std::env::var(BASE_URL_ENV)
            && !base_url.trim().is_empty()
        {
            config.backend.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.resources.is_empty() {
            return Err(ConfigError::Invalid(
                "search.resources must name at least one resource".to_string(),
            ));
        }
        if let Err(err) = url::Url::parse(&self.backend.base_url) {
            return Err(ConfigError::Invalid(format!(
                "backend.base_url `{}` is not a valid URL: {err}",
                self.backend.base_url
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.backend.timeout_ms)
    }
}

/// `$CATALOG_HOME` when set, otherwise `~/.catalog`. The directory is not
/// required to exist.
pub fn find_catalog_home() -> Result<PathBuf, ConfigError> {
    if let Ok(home) = std::env::var(CATALOG_HOME_ENV)
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(home.join(".catalog"))
}
