use crate::client::models::file::{FileList, FileRecord};
use crate::client::services::error::ApiError;

#[derive(Debug, Clone)]
pub enum Message {
    // Listing
    Refresh,
    FilesLoaded(Result<FileList, ApiError>),
    // Upload
    UploadPathChanged(String),
    UploadRequested,
    UploadFinished { filename: String, result: Result<FileRecord, ApiError> },
    // Details modal
    ShowDetails(String),
    DetailsLoaded(Result<FileRecord, ApiError>),
    CloseModal,
    // Download hand-off
    Download { id: String, filename: String },
    DownloadTriggered { filename: String, result: Result<(), ApiError> },
    // Toasts
    DismissToast(u64),
}
