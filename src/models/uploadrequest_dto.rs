use crate::models::category_dto::Category;
use crate::models::image_dao::ImageFile;

/// One per-file request issued by the client orchestrator.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: ImageFile,
    pub category: Category,
    pub stop_name: String,
    pub attribution: String,
}
