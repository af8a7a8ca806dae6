use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::models::file::{FileList, FileRecord};
use crate::client::services::download::DownloadLauncher;
use crate::client::services::error::ApiError;

/// Multipart field name the backend reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

/// A file ready to be sent to `POST /files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSource {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadSource {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { filename: filename.into(), content_type: content_type.into(), bytes }
    }

    /// Read a local file. The content type is guessed from the extension.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ApiError::Io(format!("{} has no file name", path.display())))?;
        let bytes = tokio::fs::read(path).await?;
        let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
        Ok(Self { filename, content_type, bytes })
    }
}

/// Client for the file storage REST API.
#[derive(Debug, Clone)]
pub struct FilesService {
    http: reqwest::Client,
    base_url: Url,
}

impl FilesService {
    pub fn new(base_url: Url) -> Self {
        Self { http: reqwest::Client::new(), base_url }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(cfg.api_base_url.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /files?skip=&limit=`. Bounds are left to the server.
    pub async fn list_files(&self, skip: u32, limit: u32) -> Result<FileList, ApiError> {
        let url = self.endpoint(&["files"]);
        log::debug!("Listing files: {} (skip={}, limit={})", url, skip, limit);
        let resp = self
            .http
            .get(url)
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        read_json(resp).await
    }

    /// `POST /files` with the content under the `file` multipart field.
    pub async fn upload_file(&self, source: UploadSource) -> Result<FileRecord, ApiError> {
        let url = self.endpoint(&["files"]);
        log::info!(
            "Uploading {} ({}, {} bytes)",
            source.filename,
            source.content_type,
            source.bytes.len()
        );
        let part = Part::bytes(source.bytes)
            .file_name(source.filename)
            .mime_str(&source.content_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);
        let resp = self.http.post(url).multipart(form).send().await?;
        read_json(resp).await
    }

    pub async fn upload_path(&self, path: &Path) -> Result<FileRecord, ApiError> {
        let source = UploadSource::from_path(path).await?;
        self.upload_file(source).await
    }

    /// `GET /files/{id}`. An unknown id comes back as a 404 `Server` error.
    pub async fn get_file_details(&self, id: &str) -> Result<FileRecord, ApiError> {
        let url = self.endpoint(&["files", id]);
        log::debug!("Fetching details for {}", id);
        let resp = self.http.get(url).send().await?;
        read_json(resp).await
    }

    pub fn download_url(&self, id: &str) -> Url {
        self.endpoint(&["files", id, "download"])
    }

    /// Point the launcher at `GET /files/{id}/download` and return right away.
    /// The transfer is never observed here.
    pub fn download_file(&self, id: &str, launcher: &dyn DownloadLauncher) -> Result<(), ApiError> {
        let url = self.download_url(id);
        launcher
            .trigger_browser_download(&url)
            .map_err(|e| ApiError::Launch(e.to_string()))
    }

    /// Append path segments to the base URL, keeping any prefix it has.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status.as_u16(), &body));
    }
    resp.json::<T>().await.map_err(ApiError::from)
}
