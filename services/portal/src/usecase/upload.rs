use bytes::Bytes;
use uuid::Uuid;

use crate::domain::repository::{ObjectStorage, VisualRepository};
use crate::domain::types::VisualDraft;
use crate::error::PortalError;
use crate::usecase::content::default_title_from_file;

/// Per-file ceiling enforced at this adapter; the router's request-body
/// limit is a separate, larger ceiling.
pub const MAX_UPLOAD_SIZE: usize = 15 * 1024 * 1024;

/// Bucket for project cover and gallery uploads.
pub const PROJECT_IMAGES_BUCKET: &str = "project-images";

/// Bucket for visual display images and thumbnails.
pub const VISUALS_BUCKET: &str = "visuals";

const KNOWN_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif", "heic", "heif"];

fn file_extension(file_name: &str) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    if ext.is_empty() || ext.len() > 6 {
        "jpg".to_owned()
    } else {
        ext
    }
}

fn looks_like_image(file_name: &str, content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.starts_with("image/")) {
        return true;
    }
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .is_some_and(|ext| KNOWN_IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// A file taken from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

async fn push_image<S: ObjectStorage>(
    storage: &S,
    bucket: &str,
    folder: &str,
    file: &UploadedFile,
) -> Result<Option<String>, PortalError> {
    if file.bytes.is_empty() {
        return Ok(None);
    }
    if file.bytes.len() > MAX_UPLOAD_SIZE {
        return Err(PortalError::UploadTooLarge);
    }
    if !looks_like_image(&file.file_name, file.content_type.as_deref()) {
        return Err(PortalError::UnsupportedUpload);
    }

    let path = format!("{folder}/{}.{}", Uuid::new_v4(), file_extension(&file.file_name));
    let content_type = file
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    let url = storage
        .upload(bucket, &path, content_type, file.bytes.clone())
        .await?;
    Ok(Some(url))
}

/// Validate an image file and push it to object storage.
///
/// Zero-byte files are skipped (`Ok(None)`), matching an empty file input
/// on the form. Returns the public URL on success.
pub struct UploadImageUseCase<S: ObjectStorage> {
    pub storage: S,
}

impl<S: ObjectStorage> UploadImageUseCase<S> {
    pub async fn execute(
        &self,
        bucket: &str,
        folder: &str,
        file: &UploadedFile,
    ) -> Result<Option<String>, PortalError> {
        push_image(&self.storage, bucket, folder, file).await
    }
}

/// Shared fields applied to every visual in a bulk upload.
#[derive(Debug, Clone)]
pub struct BulkVisualDefaults {
    pub tags: Vec<String>,
    pub published: bool,
    pub featured: bool,
}

/// Upload many visuals sequentially, file by file.
///
/// Each file is validated and uploaded, then its visual row is created with
/// a title derived from the file name. The first failure aborts with that
/// file's error; rows created before it remain.
pub struct BulkVisualUploadUseCase<S: ObjectStorage, R: VisualRepository> {
    pub storage: S,
    pub repo: R,
}

impl<S: ObjectStorage, R: VisualRepository> BulkVisualUploadUseCase<S, R> {
    pub async fn execute(
        &self,
        files: &[UploadedFile],
        defaults: &BulkVisualDefaults,
    ) -> Result<usize, PortalError> {
        let mut created = 0;
        for file in files {
            let Some(image_url) =
                push_image(&self.storage, VISUALS_BUCKET, "display", file).await?
            else {
                continue;
            };
            let draft = VisualDraft {
                title: default_title_from_file(&file.file_name),
                description: None,
                image_url: image_url.clone(),
                thumbnail_url: Some(image_url),
                tags: defaults.tags.clone(),
                featured: defaults.featured,
                published: defaults.published,
                shot_date: None,
            };
            self.repo.create(&draft).await?;
            created += 1;
        }
        Ok(created)
    }
}
