//! Image upload side-channel to the external asset host.
//!
//! Uploads go straight to the asset host, not through the catalog API: an
//! unauthenticated multipart POST with a fixed upload preset, answered with
//! the hosted image's secure URL. The admin flow treats a failed upload as
//! a logged non-event - the pending payload simply doesn't gain that URL.

use std::path::Path;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

/// Errors from asset-host uploads.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Could not read the local file.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// Network-level failure talking to the asset host.
    #[error("upload request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The asset host rejected the upload.
    #[error("asset host rejected upload: {0}")]
    Rejected(StatusCode),
}

/// The asset host's upload response; only the secure URL matters here.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Client for the asset host's unsigned upload endpoint.
#[derive(Debug, Clone)]
pub struct ImageUploader {
    http: reqwest::Client,
    cloud_name: String,
    upload_preset: String,
}

impl ImageUploader {
    /// Create an uploader for the given cloud account and upload preset.
    #[must_use]
    pub fn new(cloud_name: &str, upload_preset: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            cloud_name: cloud_name.to_string(),
            upload_preset: upload_preset.to_string(),
        }
    }

    /// The account-scoped upload endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }

    /// Upload one image file; returns the hosted secure URL.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` if the file cannot be read, the request fails,
    /// or the asset host rejects the upload.
    #[instrument(skip(self))]
    pub async fn upload(&self, path: &Path) -> Result<String, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("upload_preset", self.upload_preset.clone());

        let response = self.http.post(self.endpoint()).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected(status));
        }

        let body: UploadResponse = response.json().await?;
        Ok(body.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_embeds_cloud_name() {
        let uploader = ImageUploader::new("hidestyle", "hidestyle_preset");
        assert_eq!(
            uploader.endpoint(),
            "https://api.cloudinary.com/v1_1/hidestyle/image/upload"
        );
    }
}
