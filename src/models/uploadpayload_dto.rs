use bytes::Bytes;

/// The `file` part of an upload submission.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub filename: Option<String>,
    pub content_type: String,
    pub data: Bytes,
}

impl FilePart {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Raw multipart fields as received, before any validation.
#[derive(Debug, Default)]
pub struct UploadPayload {
    pub file: Option<FilePart>,
    pub category: Option<String>,
    pub stop_name: Option<String>,
    pub attribution: Option<String>,
}

/// A submission that passed validation, with trimmed metadata and the
/// attribution already normalized.
#[derive(Debug)]
pub struct ValidUpload {
    pub file: FilePart,
    pub category: String,
    pub stop_name: String,
    pub attribution: String,
}
