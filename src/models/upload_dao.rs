use crate::models::uploadresponse_dto::UploadResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A stored object as recorded in the upload ledger.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    pub id: i64,
    pub pathname: String,
    pub url: String,
    pub size: i64,
    pub content_type: String,
    pub filename: String,
    pub category: String,
    pub stop_name: String,
    pub attribution: String,
    pub created_at: String,
}

impl Upload {
    pub fn from_response(response: &UploadResponse, content_type: &str) -> Upload {
        Upload {
            id: 0,
            pathname: response.pathname.clone(),
            url: response.url.clone(),
            size: response.size as i64,
            content_type: content_type.to_string(),
            filename: response.filename.clone(),
            category: response.category.clone(),
            stop_name: response.stop_name.clone(),
            attribution: response.attribution.clone(),
            created_at: String::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UploadQuery {
    pub category: Option<String>,
    pub stop_name: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_response() {
        let response = UploadResponse {
            url: "https://blobs.example.com/Fotos/Colón/Ana_1.jpg".to_string(),
            pathname: "Fotos/Colón/Ana_1.jpg".to_string(),
            size: 42,
            filename: "Ana_1.jpg".to_string(),
            category: "Fotos".to_string(),
            stop_name: "Colón".to_string(),
            attribution: "Ana".to_string(),
        };

        let upload = Upload::from_response(&response, "image/jpeg");
        assert_eq!(upload.id, 0);
        assert_eq!(upload.size, 42);
        assert_eq!(upload.pathname, response.pathname);
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.stop_name, "Colón");
    }
}
