use crate::config::constants::UPLOAD_ENDPOINT;
use crate::models::uploadrequest_dto::UploadRequest;
use crate::models::uploadresponse_dto::{ErrorBody, UploadResponse};
use crate::services::orchestrator::Transport;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
    /// The server refused the file; carries its message verbatim
    #[error("{0}")]
    Rejected(String),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Posts files to a running upload server as multipart forms.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpUploader {
    pub fn new(server: &str) -> Result<HttpUploader, ClientError> {
        let endpoint = Url::parse(server)
            .and_then(|base| base.join(UPLOAD_ENDPOINT))
            .map_err(|e| ClientError::InvalidUrl(format!("{server}: {e}")))?;

        Ok(HttpUploader {
            client: reqwest::Client::new(),
            endpoint,
        })
    }
}

impl Transport for HttpUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(request.file.data.to_vec())
            .file_name(request.file.name.clone())
            .mime_str(&request.file.content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("category", request.category.to_string())
            .text("stopName", request.stop_name.clone())
            .text("attribution", request.attribution.clone());

        debug!("POST {} ({})", self.endpoint, request.file.name);
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Upload failed".to_string());
            return Err(ClientError::Rejected(message));
        }

        Ok(response.json::<UploadResponse>().await?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::category_dto::Category;
    use crate::models::image_dao::ImageFile;
    use bytes::Bytes;
    use mockito::Matcher;

    fn request() -> UploadRequest {
        UploadRequest {
            file: ImageFile::new("andén.png", "image/png", Bytes::from_static(b"png")),
            category: Category::NaviLensGo,
            stop_name: "Colón".to_string(),
            attribution: "ANONYMOUS".to_string(),
        }
    }

    #[test]
    fn test_new_builds_endpoint() {
        let uploader = HttpUploader::new("http://localhost:3000").unwrap();
        assert_eq!(uploader.endpoint.as_str(), "http://localhost:3000/api/upload");

        assert!(matches!(
            HttpUploader::new("localhost"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_upload_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/upload")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="stopName"\r\n\r\nColón"#.to_string()),
                Matcher::Regex(r#"name="category"\r\n\r\nNaviLensGo"#.to_string()),
                Matcher::Regex(r#"name="file"; filename=".*\.png""#.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"url":"http://localhost/blobs/NaviLensGo/Col%C3%B3n/ANONYMOUS_1.png","pathname":"NaviLensGo/Colón/ANONYMOUS_1.png","size":3,"filename":"ANONYMOUS_1.png","category":"NaviLensGo","stopName":"Colón","attribution":"ANONYMOUS"}"#,
            )
            .create_async()
            .await;

        let uploader = HttpUploader::new(&server.url()).unwrap();
        let response = uploader.upload(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.pathname, "NaviLensGo/Colón/ANONYMOUS_1.png");
        assert_eq!(response.stop_name, "Colón");
        assert_eq!(response.size, 3);
    }

    #[tokio::test]
    async fn test_upload_rejected_with_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/upload")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Solo se permiten imágenes"}"#)
            .create_async()
            .await;

        let uploader = HttpUploader::new(&server.url()).unwrap();
        let result = uploader.upload(&request()).await;

        match result {
            Err(ClientError::Rejected(message)) => assert_eq!(message, "Solo se permiten imágenes"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_rejected_without_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/upload")
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let uploader = HttpUploader::new(&server.url()).unwrap();
        let result = uploader.upload(&request()).await;

        assert!(matches!(result, Err(ClientError::Rejected(m)) if m == "Upload failed"));
    }
}
