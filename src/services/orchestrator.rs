use crate::config::constants::{ANONYMOUS, MAX_FILES, MAX_FILE_SIZE, RESET_DELAY};
use crate::models::form_dao::UploadForm;
use crate::models::image_dao::ImageFile;
use crate::models::status_dto::Status;
use crate::models::uploadrequest_dto::UploadRequest;
use crate::models::uploadresponse_dto::UploadResponse;
use crate::services::client::ClientError;
use crate::services::compress::compress_image;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Solo puedes subir hasta {0} archivos a la vez")]
    TooManyFiles(usize),
    #[error("Solo se permiten archivos de imagen")]
    NotAnImage,
    #[error("Error al comprimir la imagen")]
    CompressionFailed,
    #[error("Por favor completa todos los campos y selecciona al menos una imagen")]
    Incomplete,
    #[error("Ya hay una subida en curso")]
    AlreadyUploading,
    #[error("{0}")]
    UploadFailed(String),
}

/// What happened to a selection handed to [`UploadForm::stage`].
#[derive(Debug, Default, PartialEq)]
pub struct StageOutcome {
    pub staged: usize,
    pub compressed: usize,
    pub rejected: Vec<(String, FormError)>,
}

#[derive(Debug, PartialEq)]
pub enum Submit {
    Ready,
    /// More than one file is staged; the user must confirm they all belong
    /// to the same station and category
    NeedsConfirmation(usize),
}

// Anything that can carry one file to the upload endpoint
pub trait Transport {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError>;
}

impl UploadForm {
    /// Stages a selection of files. A selection that would push the total
    /// past the cap is rejected as a whole.
    pub fn stage(&mut self, selected: Vec<ImageFile>) -> Result<StageOutcome, FormError> {
        if self.files.len() + selected.len() > MAX_FILES {
            let err = FormError::TooManyFiles(MAX_FILES);
            self.error = Some(err.to_string());
            return Err(err);
        }

        let mut outcome = StageOutcome::default();
        for file in selected {
            if !file.is_image() {
                warn!("{} is not an image ({})", file.name, file.content_type);
                outcome.rejected.push((file.name, FormError::NotAnImage));
                continue;
            }

            if file.size() > MAX_FILE_SIZE {
                match compress_image(&file) {
                    Ok(compressed) => {
                        debug!("{}: {} -> {} bytes", file.name, file.size(), compressed.size());
                        self.files.push(compressed);
                        outcome.compressed += 1;
                    }
                    Err(e) => {
                        error!("{:?}", e);
                        outcome.rejected.push((file.name, FormError::CompressionFailed));
                        continue;
                    }
                }
            } else {
                self.files.push(file);
            }
            outcome.staged += 1;
        }

        self.error = outcome.rejected.last().map(|(_, e)| e.to_string());
        Ok(outcome)
    }

    pub fn request_submit(&mut self) -> Result<Submit, FormError> {
        if self.status == Status::Uploading {
            return Err(FormError::AlreadyUploading);
        }

        if !self.is_complete() {
            let err = FormError::Incomplete;
            self.error = Some(err.to_string());
            return Err(err);
        }

        match self.files.len() {
            1 => Ok(Submit::Ready),
            n => Ok(Submit::NeedsConfirmation(n)),
        }
    }

    fn requests(&self) -> Result<Vec<UploadRequest>, FormError> {
        let category = self.category.ok_or(FormError::Incomplete)?;
        let attribution = match self.attribution.trim() {
            "" => ANONYMOUS.to_string(),
            name => name.to_string(),
        };

        Ok(self
            .files
            .iter()
            .map(|file| UploadRequest {
                file: file.clone(),
                category,
                stop_name: self.stop_name.trim().to_string(),
                attribution: attribution.clone(),
            })
            .collect())
    }

    /// Sends every staged file concurrently and waits for all of them. Any
    /// failure fails the whole batch with the first failing file's message.
    pub async fn perform_upload<T>(&mut self, transport: &T) -> Result<Vec<UploadResponse>, FormError>
    where
        T: Transport,
    {
        if self.status == Status::Uploading {
            return Err(FormError::AlreadyUploading);
        }
        let requests = self.requests()?;

        self.status = Status::Uploading;
        self.error = None;

        let results =
            futures::future::join_all(requests.iter().map(|r| transport.upload(r))).await;

        match results.into_iter().collect::<Result<Vec<_>, _>>() {
            Ok(responses) => {
                self.status = Status::Success;
                Ok(responses)
            }
            Err(e) => {
                error!("Upload error: {:?}", e);
                let err = FormError::UploadFailed(e.to_string());
                self.status = Status::Error;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// After a successful batch, waits out the acknowledgment delay and
    /// clears the form. Any other state is left alone.
    pub async fn settle(&mut self) {
        if self.status == Status::Success {
            tokio::time::sleep(RESET_DELAY).await;
            self.reset();
        }
    }
}
