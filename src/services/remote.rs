use crate::services::storage::{BlobStore, PutOptions, StorageError, StoredBlob};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

//-------------------------
// HTTP blob API
//-------------------------
//
// PUT {api_url}/?pathname={key} with the raw bytes as body. The API answers
// with the public URL and the final pathname of the object.
pub struct RemoteStore {
    client: reqwest::Client,
    api_url: Url,
    token: String,
}

#[derive(serde::Deserialize, Debug)]
struct PutBlobResponse {
    url: String,
    pathname: String,
}

impl RemoteStore {
    pub fn new(api_url: &str, token: String, timeout: Duration) -> Result<RemoteStore, StorageError> {
        let api_url =
            Url::parse(api_url).map_err(|e| StorageError::InvalidUrl(format!("{api_url}: {e}")))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(RemoteStore {
            client,
            api_url,
            token,
        })
    }
}

#[async_trait]
impl BlobStore for RemoteStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        options: PutOptions,
    ) -> Result<StoredBlob, StorageError> {
        let mut url = self.api_url.clone();
        url.query_pairs_mut().append_pair("pathname", key);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.token)
            .header(header::CONTENT_TYPE, &options.content_type)
            .header("x-content-type", &options.content_type)
            .header("x-access", options.access.to_string())
            .header("x-add-random-suffix", "0")
            .body(data)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let blob = response.json::<PutBlobResponse>().await?;
                Ok(StoredBlob {
                    url: blob.url,
                    pathname: blob.pathname,
                })
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(StorageError::UnexpectedStatus(status, body))
            }
        }
    }
}
