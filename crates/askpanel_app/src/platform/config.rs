use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use askpanel_engine::SearchSettings;
use panel_logging::{panel_info, panel_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILENAME: &str = "askpanel.ron";
pub const API_KEY_VAR: &str = "SERPER_API_KEY";
pub const HISTORY_FLAG_VAR: &str = "ENABLE_SAVE_CHAT_HISTORY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("region must be a two-letter code, got {0:?}")]
    InvalidRegion(String),
}

/// Optional overrides read from the RON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct FileConfig {
    endpoint: Option<String>,
    region: Option<String>,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    max_bytes: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search: SearchSettings,
    /// Shows the history indicator; storing history is not handled here.
    pub history_enabled: bool,
}

impl AppConfig {
    /// Layers defaults, the config file and the environment, in that order.
    ///
    /// An explicitly requested file must exist; the default file is optional.
    pub fn load(
        explicit_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match explicit_path {
            Some(path) => read_file_config(path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                match read_file_config(&path) {
                    Ok(file) => file,
                    Err(ConfigError::Read { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        FileConfig::default()
                    }
                    Err(err) => return Err(err),
                }
            }
        };
        Self::from_layers(file, env)
    }

    fn from_layers(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut search = SearchSettings::default();
        if let Some(endpoint) = file.endpoint {
            search.endpoint = endpoint;
        }
        if let Some(region) = file.region {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidRegion(region));
            }
            search.region = region.to_ascii_lowercase();
        }
        search.connect_timeout = file.connect_timeout_ms.map(Duration::from_millis);
        search.request_timeout = file.request_timeout_ms.map(Duration::from_millis);
        if let Some(max_bytes) = file.max_bytes {
            search.max_bytes = max_bytes;
        }

        match env(API_KEY_VAR) {
            Some(key) if !key.is_empty() => search.api_key = key,
            _ => panel_warn!("{} is not set; video search will fall back", API_KEY_VAR),
        }
        let history_enabled = env(HISTORY_FLAG_VAR).as_deref() == Some("true");

        Ok(Self {
            search,
            history_enabled,
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    panel_info!("Loaded config from {:?}", path);
    Ok(file)
}
