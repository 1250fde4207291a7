use crate::models::category_dto::Category;
use crate::models::uploadpayload_dto::{UploadPayload, ValidUpload};
use crate::models::uploadresponse_dto::{ErrorBody, UploadResponse};
use crate::services::stations::Stations;
use crate::services::storage::{Access, BlobStore, PutOptions, StorageError};
use crate::utils::io::{extension_of, is_safe_segment, normalize_attribution};
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No se proporcionó ningún archivo")]
    MissingFile,
    #[error("Faltan campos requeridos (categoría y parada)")]
    MissingFields,
    #[error("El tamaño del archivo excede el límite de {0}MB")]
    FileTooLarge(u64),
    #[error("Solo se permiten imágenes")]
    NotAnImage,
    #[error("Nombre de categoría o parada no válido")]
    InvalidSegment,
    #[error("Categoría no válida")]
    UnknownCategory,
    #[error("Parada desconocida")]
    UnknownStop,
    // Internal failures share one client-facing message; the cause is only logged
    #[error("Error al subir el archivo")]
    NotMultipart(#[from] MultipartRejection),
    #[error("Error al subir el archivo")]
    Multipart(#[from] MultipartError),
    #[error("Error al subir el archivo")]
    Storage(#[from] StorageError),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NotMultipart(_)
            | UploadError::Multipart(_)
            | UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            UploadError::NotMultipart(e) => error!("Upload error: not a multipart body: {e}"),
            UploadError::Multipart(e) => error!("Upload error: malformed body: {e}"),
            UploadError::Storage(e) => error!("Upload error: {e}"),
            e => warn!("Rejected upload: {e}"),
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub struct ValidationRules<'a> {
    pub max_file_size: u64,
    pub strict_metadata: bool,
    pub stations: &'a Stations,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks run in a fixed order and the first failure wins: file, required
/// fields, size, content type, then key safety and (optionally) the catalog.
pub fn validate(payload: UploadPayload, rules: &ValidationRules) -> Result<ValidUpload, UploadError> {
    let file = payload.file.ok_or(UploadError::MissingFile)?;

    let (Some(category), Some(stop_name)) =
        (non_blank(payload.category), non_blank(payload.stop_name))
    else {
        return Err(UploadError::MissingFields);
    };

    if file.size() > rules.max_file_size {
        return Err(UploadError::FileTooLarge(limit_mb(rules.max_file_size)));
    }

    if !file.is_image() {
        return Err(UploadError::NotAnImage);
    }

    if !is_safe_segment(&category) || !is_safe_segment(&stop_name) {
        return Err(UploadError::InvalidSegment);
    }

    if rules.strict_metadata {
        if category.parse::<Category>().is_err() {
            return Err(UploadError::UnknownCategory);
        }
        if !rules.stations.contains(&stop_name) {
            return Err(UploadError::UnknownStop);
        }
    }

    Ok(ValidUpload {
        attribution: normalize_attribution(payload.attribution.as_deref()),
        file,
        category,
        stop_name,
    })
}

/// Size limit in whole MB for messages, rounded up so sub-MB limits never read as 0.
pub fn limit_mb(max_file_size: u64) -> u64 {
    max_file_size.div_ceil(1024 * 1024)
}

pub fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// `{attribution}_{timestamp}.{extension}`
pub fn object_filename(attribution: &str, original: Option<&str>, timestamp: u128) -> String {
    format!("{}_{}.{}", attribution, timestamp, extension_of(original))
}

/// `{category}/{stopName}/{filename}`
pub fn object_key(category: &str, stop_name: &str, filename: &str) -> String {
    format!("{category}/{stop_name}/{filename}")
}

/// Names the object and hands it to the store. The single `put` is the only
/// side effect, so a failure leaves nothing behind.
pub async fn persist(
    store: &dyn BlobStore,
    upload: ValidUpload,
    timestamp: u128,
) -> Result<UploadResponse, UploadError> {
    let filename = object_filename(&upload.attribution, upload.file.filename.as_deref(), timestamp);
    let key = object_key(&upload.category, &upload.stop_name, &filename);
    let size = upload.file.size();

    let blob = store
        .put(
            &key,
            upload.file.data,
            PutOptions {
                access: Access::Public,
                content_type: upload.file.content_type,
            },
        )
        .await?;
    info!("stored {} ({} bytes)", blob.pathname, size);

    Ok(UploadResponse {
        url: blob.url,
        pathname: blob.pathname,
        size,
        filename,
        category: upload.category,
        stop_name: upload.stop_name,
        attribution: upload.attribution,
    })
}
