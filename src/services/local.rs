use crate::services::storage::{BlobStore, PutOptions, StorageError, StoredBlob};
use crate::utils::io::{is_safe_segment, write_to_file};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use std::path::PathBuf;
use tracing::debug;

//-------------------------
// filesystem-backed store, served back by the router under /blobs
//-------------------------
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    public_base_url: Url,
}

impl LocalStore {
    pub fn new(root: PathBuf, public_base_url: &str) -> Result<LocalStore, StorageError> {
        let public_base_url = Url::parse(public_base_url)
            .map_err(|e| StorageError::InvalidUrl(format!("{public_base_url}: {e}")))?;
        if public_base_url.cannot_be_a_base() {
            return Err(StorageError::InvalidUrl(public_base_url.to_string()));
        }

        Ok(LocalStore {
            root,
            public_base_url,
        })
    }

    fn public_url(&self, key: &str) -> String {
        let mut url = self.public_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(key.split('/'));
        }
        url.to_string()
    }
}

#[async_trait]
impl BlobStore for LocalStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        _options: PutOptions,
    ) -> Result<StoredBlob, StorageError> {
        if !key.split('/').all(is_safe_segment) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let path = key.split('/').fold(self.root.clone(), |p, s| p.join(s));
        debug!("writing {} bytes to {}", data.len(), path.display());
        write_to_file(&path, &data).await?;

        Ok(StoredBlob {
            url: self.public_url(key),
            pathname: key.to_string(),
        })
    }
}
