use crate::models::upload_dao::Upload;
use crate::models::uploadpayload_dto::{FilePart, UploadPayload};
use crate::models::uploadresponse_dto::{ErrorBody, UploadResponse};
use crate::routes::router::AppState;
use crate::services::uploads::{self, UploadError, ValidationRules};
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Json, Multipart, State};
use axum::http::StatusCode;
use tracing::warn;

async fn read_payload(multipart: &mut Multipart) -> Result<UploadPayload, MultipartError> {
    let mut payload = UploadPayload::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_owned) else {
            continue;
        };

        match field_name.as_str() {
            "file" => {
                let filename = field.file_name().map(str::to_owned);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let data = field.bytes().await?;

                // browsers send an empty, nameless part when no file was picked
                if data.is_empty() && filename.as_deref().unwrap_or_default().is_empty() {
                    continue;
                }

                payload.file = Some(FilePart {
                    filename,
                    content_type,
                    data,
                });
            }
            "category" => payload.category = Some(field.text().await?),
            "stopName" => payload.stop_name = Some(field.text().await?),
            "attribution" => payload.attribution = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(payload)
}

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(
        content_type = "multipart/form-data",
        description = "Fields: `file` (binary), `category`, `stopName`, `attribution` (optional)",
    ),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Storage or body failure", body = ErrorBody),
    ),
    tag = "uploads"
)]
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, UploadError> {
    let mut multipart = multipart?;
    // A file past the body limit is cut off mid-read; report it as oversized
    let payload = read_payload(&mut multipart).await.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => {
            UploadError::FileTooLarge(uploads::limit_mb(state.config.max_file_size))
        }
        _ => UploadError::Multipart(e),
    })?;

    let rules = ValidationRules {
        max_file_size: state.config.max_file_size,
        strict_metadata: state.config.strict_metadata,
        stations: &state.stations,
    };
    let valid = uploads::validate(payload, &rules)?;
    let content_type = valid.file.content_type.clone();

    let response = uploads::persist(state.store.as_ref(), valid, uploads::epoch_millis()).await?;

    // The object is already stored; a ledger failure must not fail the upload
    let mut record = Upload::from_response(&response, &content_type);
    if let Err(e) = record.add_to_db(&state.pool).await {
        warn!("could not record {} in the ledger: {:?}", response.pathname, e);
    }

    Ok(Json(response))
}
