use crate::config::loader::{Config, StorageConfig};
use crate::services::local::LocalStore;
use crate::services::remote::RemoteStore;
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to write object: {0}")]
    Write(#[from] std::io::Error),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Unexpected status code {0}: {1}")]
    UnexpectedStatus(reqwest::StatusCode, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public => write!(f, "public"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutOptions {
    pub access: Access,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    pub url: String,
    pub pathname: String,
}

/// Write-once, key-addressed blob sink.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        options: PutOptions,
    ) -> Result<StoredBlob, StorageError>;
}

pub fn from_config(config: &Config) -> Result<Arc<dyn BlobStore>, StorageError> {
    match &config.storage {
        StorageConfig::Local {
            public_base_url, ..
        } => {
            // local_root is always Some for the local backend
            let root = config.local_root().unwrap_or_default();
            Ok(Arc::new(LocalStore::new(root, public_base_url)?))
        }
        StorageConfig::Remote {
            api_url,
            token,
            timeout_secs,
        } => Ok(Arc::new(RemoteStore::new(
            api_url,
            token.clone().unwrap_or_default(),
            std::time::Duration::from_secs(*timeout_secs),
        )?)),
    }
}
