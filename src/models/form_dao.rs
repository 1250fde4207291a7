use crate::models::category_dto::Category;
use crate::models::image_dao::ImageFile;
use crate::models::status_dto::Status;

/// Client-side form state for one upload session.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub category: Option<Category>,
    pub stop_name: String,
    pub attribution: String,
    pub files: Vec<ImageFile>,
    pub status: Status,
    /// Inline message shown to the user, if any
    pub error: Option<String>,
}

impl UploadForm {
    pub fn new() -> UploadForm {
        UploadForm::default()
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn set_stop_name(&mut self, stop_name: impl Into<String>) {
        self.stop_name = stop_name.into();
    }

    pub fn set_attribution(&mut self, attribution: impl Into<String>) {
        self.attribution = attribution.into();
    }

    /// Unstages the file at `index`, if there is one.
    pub fn remove_file(&mut self, index: usize) -> Option<ImageFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn is_complete(&self) -> bool {
        self.category.is_some() && !self.stop_name.trim().is_empty() && !self.files.is_empty()
    }

    pub fn reset(&mut self) {
        *self = UploadForm::default();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bytes::Bytes;

    fn image(name: &str) -> ImageFile {
        ImageFile::new(name, "image/jpeg", Bytes::from_static(b"jpeg"))
    }

    #[test]
    fn test_is_complete() {
        let mut form = UploadForm::new();
        assert!(!form.is_complete());

        form.set_category(Category::Fotos);
        form.set_stop_name("Alameda");
        assert!(!form.is_complete());

        form.files.push(image("a.jpg"));
        assert!(form.is_complete());

        form.set_stop_name("   ");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut form = UploadForm::new();
        form.set_category(Category::Otro);
        form.set_stop_name("Colón");
        form.set_attribution("Pau");
        form.files.push(image("a.jpg"));
        form.status = Status::Success;
        form.error = Some("x".to_string());

        form.reset();

        assert!(form.category.is_none());
        assert!(form.stop_name.is_empty());
        assert!(form.attribution.is_empty());
        assert!(form.files.is_empty());
        assert_eq!(form.status, Status::Idle);
        assert!(form.error.is_none());
    }
}
