use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL returned by the storage backend
    pub url: String,
    /// Storage key, `{category}/{stopName}/{filename}`
    pub pathname: String,
    pub size: u64,
    pub filename: String,
    pub category: String,
    pub stop_name: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
