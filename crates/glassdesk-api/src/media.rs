use std::path::{Path, PathBuf};

use anyhow::Result;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;

/// Accepted image types, matched against both the file extension and the
/// declared content type.
const IMAGE_TYPES: &[&str] = &["jpeg", "jpg", "png"];

/// Which upload slot a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    ProfilePicture,
    Wallpaper,
}

impl MediaKind {
    pub fn from_field(name: &str) -> Option<Self> {
        match name {
            "profilePicture" => Some(MediaKind::ProfilePicture),
            "wallpaper" => Some(MediaKind::Wallpaper),
            _ => None,
        }
    }

    /// Public path prefix the stored file is served under.
    pub fn mount(self) -> &'static str {
        match self {
            MediaKind::ProfilePicture => "/uploads",
            MediaKind::Wallpaper => "/wallpapers",
        }
    }
}

/// A file received in a multipart body, not yet written.
#[derive(Debug)]
pub struct Upload {
    pub kind: MediaKind,
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct StoredAsset {
    pub file_name: String,
    pub url: String,
}

/// Flat on-disk storage for uploaded images.
///
/// Files are never removed, even when a user later points at another asset.
pub struct MediaStore {
    upload_dir: PathBuf,
    wallpaper_dir: PathBuf,
    public_url: String,
}

impl MediaStore {
    pub async fn new(upload_dir: PathBuf, wallpaper_dir: PathBuf, public_url: &str) -> Result<Self> {
        fs::create_dir_all(&upload_dir).await?;
        fs::create_dir_all(&wallpaper_dir).await?;
        info!(
            "Media directories: {} (profile pictures), {} (wallpapers)",
            upload_dir.display(),
            wallpaper_dir.display()
        );
        Ok(Self {
            upload_dir,
            wallpaper_dir,
            public_url: public_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn dir(&self, kind: MediaKind) -> &Path {
        match kind {
            MediaKind::ProfilePicture => &self.upload_dir,
            MediaKind::Wallpaper => &self.wallpaper_dir,
        }
    }

    /// Write an upload under a fresh unique name and return its public URL.
    pub async fn store(&self, upload: &Upload) -> Result<StoredAsset> {
        let file_name = stored_name(&upload.file_name);
        let path = self.dir(upload.kind).join(&file_name);

        let mut file = fs::File::create(&path).await?;
        file.write_all(&upload.bytes).await?;
        file.flush().await?;

        let url = format!("{}{}/{}", self.public_url, upload.kind.mount(), file_name);
        info!("Stored {} bytes at {}", upload.bytes.len(), path.display());
        Ok(StoredAsset { file_name, url })
    }
}

/// Reject anything that is not a jpeg or png by both extension and content type.
pub fn check_image(file_name: &str, content_type: Option<&str>) -> Result<(), ApiError> {
    let ext_ok = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_TYPES.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    let mime_ok = content_type
        .map(|ct| IMAGE_TYPES.iter().any(|t| ct.contains(t)))
        .unwrap_or(false);

    if ext_ok && mime_ok {
        Ok(())
    } else {
        Err(ApiError::Validation("Error: Images Only!".into()))
    }
}

/// `<uuid>-<original>`, with the original reduced to URL- and path-safe characters.
fn stored_name(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");
    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}-{}", Uuid::new_v4(), safe)
}
