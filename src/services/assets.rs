use crate::config::MediaConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Every ingested image is re-encoded to lossy WebP at this quality,
/// regardless of the uploaded format.
const WEBP_QUALITY: f32 = 80.0;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode or encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("asset I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
}

/// An uploaded file as it arrives from a multipart request. Size and MIME
/// ceilings are the caller's responsibility; the store is limit-agnostic.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Manages the lifecycle of uploaded binary assets: store under a bucket
/// with a collision-resistant name, replace, delete, and resolve public URLs.
///
/// Images are normalized to WebP on ingest; raw uploaded image bytes are
/// never written to disk. Videos are copied verbatim with their original
/// extension. Each call writes to a freshly generated filename, so concurrent
/// requests never contend on a path.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
    public_base_url: String,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let mut base = public_base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            root: root.into(),
            public_base_url: base,
        }
    }

    pub fn from_config(media: &MediaConfig) -> Self {
        Self::new(&media.upload_dir, &media.public_base_url)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist an upload under `bucket` and return the generated stored name.
    ///
    /// The bucket directory is created on demand. Failures are fatal to the
    /// calling request: the caller must not persist a record referencing an
    /// asset that was never written.
    pub fn store(
        &self,
        file: &UploadFile,
        bucket: &str,
        kind: AssetKind,
    ) -> Result<String, AssetError> {
        let dir = self.root.join(bucket);
        std::fs::create_dir_all(&dir)?;

        let stored_name = match kind {
            AssetKind::Image => {
                let img = image::load_from_memory(&file.data)?;
                let rgba = img.to_rgba8();
                let encoded =
                    webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height())
                        .encode(WEBP_QUALITY);
                let name = format!("{}.webp", Uuid::new_v4());
                std::fs::write(dir.join(&name), &*encoded)?;
                name
            }
            AssetKind::Video => {
                let ext = Path::new(&file.original_name)
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("");
                let name = if ext.is_empty() {
                    Uuid::new_v4().to_string()
                } else {
                    format!("{}.{}", Uuid::new_v4(), ext)
                };
                std::fs::write(dir.join(&name), &file.data)?;
                name
            }
        };

        Ok(stored_name)
    }

    /// Store the new upload, then attempt to remove the previous asset.
    /// The new file is written first; failure to remove the old one is
    /// logged and swallowed, never surfaced to the caller.
    pub fn replace(
        &self,
        old_stored_name: Option<&str>,
        file: &UploadFile,
        bucket: &str,
        kind: AssetKind,
    ) -> Result<String, AssetError> {
        let new_name = self.store(file, bucket, kind)?;
        if let Some(old) = old_stored_name {
            self.delete(old, bucket);
        }
        Ok(new_name)
    }

    /// Remove `bucket/stored_name` if present. Idempotent: a missing file is
    /// not an error. Names that escape the bucket are ignored.
    pub fn delete(&self, stored_name: &str, bucket: &str) {
        if stored_name.is_empty()
            || stored_name.contains("..")
            || stored_name.contains('/')
            || stored_name.contains('\\')
        {
            tracing::warn!("refusing to delete suspicious asset name: {}", stored_name);
            return;
        }

        let path = self.root.join(bucket).join(stored_name);
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("failed to remove asset {}: {}", path.display(), e);
            }
        }
    }

    /// Pure address resolution; no filesystem access.
    pub fn url_for(&self, stored_name: &str, bucket: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, bucket, stored_name)
    }

    /// `url_for` lifted over nullable image columns.
    pub fn url_opt(&self, stored_name: Option<&str>, bucket: &str) -> Option<String> {
        stored_name.map(|name| self.url_for(name, bucket))
    }
}
