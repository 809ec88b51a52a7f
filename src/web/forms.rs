use crate::services::assets::UploadFile;
use crate::web::error::ApiError;
use axum::extract::Multipart;
use std::collections::{BTreeMap, HashMap};

/// Main content images: 2MB ceiling.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;
/// Video-capable fields: 10MB ceiling.
pub const MAX_VIDEO_BYTES: usize = 10 * 1024 * 1024;

const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const VIDEO_MIME_TYPES: &[&str] = &[
    "video/mp4",
    "video/quicktime",
    "video/x-msvideo",
    "video/webm",
];

/// A fully buffered multipart form: text fields and file fields by name.
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadFile>,
}

impl FormData {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut fields = HashMap::new();
        let mut files = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if let Some(file_name) = field.file_name() {
                let original_name = file_name.to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?
                    .to_vec();
                files.insert(
                    name,
                    UploadFile {
                        original_name,
                        content_type,
                        data,
                    },
                );
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read field: {}", e)))?;
                fields.insert(name, value);
            }
        }

        Ok(Self { fields, files })
    }

    /// Trimmed text value; empty strings count as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn file(&self, name: &str) -> Option<&UploadFile> {
        self.files.get(name)
    }

    pub fn bool_flag(&self, name: &str, default: bool) -> bool {
        match self.text(name).as_deref() {
            Some("1") | Some("true") | Some("on") => true,
            Some("0") | Some("false") | Some("off") => false,
            _ => default,
        }
    }
}

/// Collects field-level errors the way the dashboard frontend expects them:
/// one message per field, reported together as a 422.
pub struct Validator<'a> {
    form: &'a FormData,
    errors: BTreeMap<String, String>,
}

impl<'a> Validator<'a> {
    pub fn new(form: &'a FormData) -> Self {
        Self {
            form,
            errors: BTreeMap::new(),
        }
    }

    pub fn required(&mut self, name: &str) -> String {
        match self.form.text(name) {
            Some(value) => value,
            None => {
                self.fail(name, format!("The {} field is required.", name));
                String::new()
            }
        }
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        self.form.text(name)
    }

    pub fn required_image(&mut self, name: &str) -> Option<&'a UploadFile> {
        match self.form.file(name) {
            Some(file) => self.check_image(name, file),
            None => {
                self.fail(name, format!("The {} field is required.", name));
                None
            }
        }
    }

    pub fn optional_image(&mut self, name: &str) -> Option<&'a UploadFile> {
        match self.form.file(name) {
            Some(file) => self.check_image(name, file),
            None => None,
        }
    }

    pub fn required_video(&mut self, name: &str) -> Option<&'a UploadFile> {
        match self.form.file(name) {
            Some(file) => self.check_video(name, file),
            None => {
                self.fail(name, format!("The {} field is required.", name));
                None
            }
        }
    }

    pub fn optional_video(&mut self, name: &str) -> Option<&'a UploadFile> {
        match self.form.file(name) {
            Some(file) => self.check_video(name, file),
            None => None,
        }
    }

    pub fn fail(&mut self, name: &str, message: impl Into<String>) {
        self.errors.entry(name.to_string()).or_insert(message.into());
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }

    fn check_image(&mut self, name: &str, file: &'a UploadFile) -> Option<&'a UploadFile> {
        if !IMAGE_MIME_TYPES.contains(&file.content_type.as_str()) {
            self.fail(
                name,
                format!("The {} must be a jpeg, png or webp image.", name),
            );
            return None;
        }
        if file.data.len() > MAX_IMAGE_BYTES {
            self.fail(name, format!("The {} may not be greater than 2MB.", name));
            return None;
        }
        Some(file)
    }

    fn check_video(&mut self, name: &str, file: &'a UploadFile) -> Option<&'a UploadFile> {
        if !VIDEO_MIME_TYPES.contains(&file.content_type.as_str()) {
            self.fail(
                name,
                format!("The {} must be an mp4, mov, avi or webm video.", name),
            );
            return None;
        }
        if file.data.len() > MAX_VIDEO_BYTES {
            self.fail(name, format!("The {} may not be greater than 10MB.", name));
            return None;
        }
        Some(file)
    }
}
