use crate::config::constants::{BLOB_TOKEN_ENV, DATA_PATH_ENV, MAX_FILE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Read(#[from] io::Error),
    #[error("Could not parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Remote storage needs a token, set `token` or {BLOB_TOKEN_ENV}")]
    MissingToken,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Working directory for the ledger database and locally stored blobs
    pub data_path: String,
    pub database_url: Option<String>,
    pub max_file_size: u64,
    /// Reject categories outside the fixed set and stop names missing from the station list
    pub strict_metadata: bool,
    pub stations_file: Option<String>,
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    Local {
        root: Option<String>,
        public_base_url: String,
    },
    Remote {
        api_url: String,
        token: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Local {
            root: None,
            public_base_url: "http://127.0.0.1:3000/blobs".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_path: "data".to_string(),
            database_url: None,
            max_file_size: MAX_FILE_SIZE,
            strict_metadata: false,
            stations_file: None,
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn new(input_file: &str) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(input_file)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Reads `input_file` if it exists, otherwise starts from defaults, then
    /// applies environment overrides.
    pub fn load(input_file: &str) -> Result<Config, ConfigError> {
        let mut config = if Path::new(input_file).exists() {
            info!("loading configuration from {}", input_file);
            Config::new(input_file)?
        } else {
            warn!("{} not found - using default configuration", input_file);
            Config::default()
        };

        if let Ok(data_path) = env::var(DATA_PATH_ENV) {
            config.data_path = data_path;
        }

        if let StorageConfig::Remote { token, .. } = &mut config.storage {
            if token.is_none() {
                *token = env::var(BLOB_TOKEN_ENV).ok();
            }
            if token.is_none() {
                return Err(ConfigError::MissingToken);
            }
        }

        Ok(config)
    }

    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}/uploads.sqlite?mode=rwc", self.data_path),
        }
    }

    pub fn storage_backend(&self) -> &'static str {
        match self.storage {
            StorageConfig::Local { .. } => "local",
            StorageConfig::Remote { .. } => "remote",
        }
    }

    /// Directory holding blobs when the local backend is in use.
    pub fn local_root(&self) -> Option<PathBuf> {
        match &self.storage {
            StorageConfig::Local { root, .. } => Some(match root {
                Some(root) => PathBuf::from(root),
                None => Path::new(&self.data_path).join("blobs"),
            }),
            StorageConfig::Remote { .. } => None,
        }
    }
}
