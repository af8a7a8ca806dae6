use std::path::PathBuf;
use std::time::Duration;

use crate::client::config::ClientConfig;
use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::file::FileRecord;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::GridContent;

/// Side effects requested by [`FileAppState::update`]. The GUI shell turns
/// each one into an async command whose outcome comes back as a `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadFiles { skip: u32, limit: u32 },
    Upload { path: PathBuf, filename: String },
    FetchDetails { id: String },
    Download { id: String, filename: String },
    DismissToastAfter { id: u64, after: Duration },
}

/// Single owner of the UI state. Only mutated from the iced update loop.
#[derive(Debug, Clone)]
pub struct FileAppState {
    pub files: Vec<FileRecord>,
    pub total: u64,
    pub loading: bool,
    /// An upload is in flight. Independent of `loading`, which a refresh may clear.
    pub uploading: bool,
    pub selected_file: Option<FileRecord>,
    pub modal_open: bool,
    pub upload_path: String,
    pub logger: Vec<LogMessage>,
    list_limit: u32,
    toast_timeout: Duration,
    next_toast_id: u64,
}

impl FileAppState {
    pub fn new(cfg: &ClientConfig) -> Self {
        Self {
            files: Vec::new(),
            total: 0,
            loading: false,
            uploading: false,
            selected_file: None,
            modal_open: false,
            upload_path: String::new(),
            logger: Vec::new(),
            list_limit: cfg.list_limit,
            toast_timeout: cfg.toast_timeout,
            next_toast_id: 0,
        }
    }

    /// Initial state: loading, no files, first listing requested.
    pub fn startup(cfg: &ClientConfig) -> (Self, Vec<Effect>) {
        let mut state = Self::new(cfg);
        let effects = vec![state.begin_load()];
        (state, effects)
    }

    pub fn grid(&self) -> GridContent<'_> {
        if self.loading {
            GridContent::Loading
        } else if self.files.is_empty() {
            GridContent::Empty
        } else {
            GridContent::Cards(&self.files)
        }
    }

    /// Uploads run one at a time and never overlap a listing.
    pub fn can_upload(&self) -> bool {
        !self.loading && !self.uploading
    }

    /// The record the modal shows, if it is open.
    pub fn modal_file(&self) -> Option<&FileRecord> {
        if self.modal_open { self.selected_file.as_ref() } else { None }
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Refresh => vec![self.begin_load()],
            Message::FilesLoaded(result) => {
                match result {
                    Ok(list) => {
                        log::info!("Loaded {} of {} files", list.files.len(), list.total);
                        self.files = list.files;
                        self.total = list.total;
                    }
                    // stale list stays on screen
                    Err(e) => log::error!("Error loading files: {}", e),
                }
                self.loading = false;
                vec![]
            }
            Message::UploadPathChanged(path) => {
                self.upload_path = path;
                vec![]
            }
            Message::UploadRequested => {
                let path = self.upload_path.trim();
                if path.is_empty() {
                    return vec![];
                }
                if !self.can_upload() {
                    log::debug!("Upload ignored while another request is in flight");
                    return vec![];
                }
                let path = PathBuf::from(path);
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.loading = true;
                self.uploading = true;
                vec![Effect::Upload { path, filename }]
            }
            Message::UploadFinished { filename, result } => {
                self.uploading = false;
                match result {
                    Ok(record) => {
                        log::info!("Uploaded {} as {}", filename, record.id);
                        self.upload_path.clear();
                        let toast = self.push_toast(LogLevel::Success, format!("Successfully uploaded {}", filename));
                        // reload instead of appending so server-assigned fields are authoritative
                        vec![toast, self.begin_load()]
                    }
                    Err(e) => {
                        log::error!("Error uploading file {}: {}", filename, e);
                        self.loading = false;
                        vec![self.push_toast(LogLevel::Error, format!("Failed to upload {}", filename))]
                    }
                }
            }
            Message::ShowDetails(id) => vec![Effect::FetchDetails { id }],
            Message::DetailsLoaded(result) => match result {
                Ok(record) => {
                    self.selected_file = Some(record);
                    self.modal_open = true;
                    vec![]
                }
                Err(e) => {
                    log::error!("Error fetching file details: {}", e);
                    vec![self.push_toast(LogLevel::Error, "Failed to fetch file details".to_string())]
                }
            },
            Message::CloseModal => {
                self.modal_open = false;
                vec![]
            }
            Message::Download { id, filename } => vec![Effect::Download { id, filename }],
            Message::DownloadTriggered { filename, result } => match result {
                Ok(()) => vec![self.push_toast(LogLevel::Success, format!("Downloading {}", filename))],
                Err(e) => {
                    log::error!("Error downloading file {}: {}", filename, e);
                    vec![self.push_toast(LogLevel::Error, format!("Failed to download {}", filename))]
                }
            },
            Message::DismissToast(id) => {
                self.logger.retain(|t| t.id != id);
                vec![]
            }
        }
    }

    fn begin_load(&mut self) -> Effect {
        self.loading = true;
        Effect::LoadFiles { skip: 0, limit: self.list_limit }
    }

    fn push_toast(&mut self, level: LogLevel, message: String) -> Effect {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.logger.push(LogMessage { id, level, message });
        Effect::DismissToastAfter { id, after: self.toast_timeout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::file::FileList;
    use crate::client::services::error::ApiError;

    fn record(id: &str, name: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            filename: name.to_string(),
            content_type: "text/plain".to_string(),
            file_path: format!("uploads/{}", name),
            upload_date: "2024-01-05T15:04:05".to_string(),
        }
    }

    fn loaded(files: Vec<FileRecord>) -> FileAppState {
        let (mut state, _) = FileAppState::startup(&ClientConfig::default());
        let total = files.len() as u64;
        state.update(Message::FilesLoaded(Ok(FileList { files, total })));
        state
    }

    fn network_error() -> ApiError {
        ApiError::Network("connection refused".into())
    }

    fn toast_texts(state: &FileAppState) -> Vec<(LogLevel, &str)> {
        state.logger.iter().map(|t| (t.level, t.message.as_str())).collect()
    }

    #[test]
    fn startup_is_loading_and_requests_listing() {
        let (state, effects) = FileAppState::startup(&ClientConfig::default());
        assert!(state.loading);
        assert_eq!(state.grid(), GridContent::Loading);
        assert_eq!(effects, vec![Effect::LoadFiles { skip: 0, limit: 100 }]);
    }

    #[test]
    fn listing_keeps_server_order() {
        let state = loaded(vec![record("3", "c"), record("1", "a"), record("2", "b")]);
        assert!(!state.loading);
        match state.grid() {
            GridContent::Cards(cards) => {
                let ids: Vec<_> = cards.iter().map(|f| f.id.as_str()).collect();
                assert_eq!(ids, ["3", "1", "2"]);
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn empty_listing_shows_placeholder() {
        let state = loaded(vec![]);
        assert_eq!(state.grid(), GridContent::Empty);
    }

    #[test]
    fn failed_listing_keeps_stale_files_without_toast() {
        let mut state = loaded(vec![record("1", "a")]);
        state.update(Message::Refresh);
        assert!(state.loading);
        let effects = state.update(Message::FilesLoaded(Err(network_error())));
        assert!(effects.is_empty());
        assert!(!state.loading);
        assert_eq!(state.files.len(), 1);
        assert!(state.logger.is_empty());
    }

    #[test]
    fn upload_success_toasts_and_reloads() {
        let mut state = loaded(vec![]);
        state.update(Message::UploadPathChanged("/tmp/docs/report.pdf".into()));

        let effects = state.update(Message::UploadRequested);
        assert!(state.loading);
        assert_eq!(
            effects,
            vec![Effect::Upload { path: PathBuf::from("/tmp/docs/report.pdf"), filename: "report.pdf".into() }]
        );

        let effects = state.update(Message::UploadFinished {
            filename: "report.pdf".into(),
            result: Ok(record("new", "report.pdf")),
        });
        assert_eq!(
            effects,
            vec![
                Effect::DismissToastAfter { id: 0, after: Duration::from_millis(3000) },
                Effect::LoadFiles { skip: 0, limit: 100 },
            ]
        );
        // still loading until the reload lands
        assert!(state.loading);
        assert!(state.files.is_empty());
        assert!(state.upload_path.is_empty());
        assert_eq!(toast_texts(&state), vec![(LogLevel::Success, "Successfully uploaded report.pdf")]);

        state.update(Message::FilesLoaded(Ok(FileList { files: vec![record("new", "report.pdf")], total: 1 })));
        assert!(!state.loading);
        assert_eq!(state.files[0].id, "new");
    }

    #[test]
    fn upload_failure_toasts_once_and_keeps_list() {
        let mut state = loaded(vec![record("1", "a")]);
        state.update(Message::UploadPathChanged("report.pdf".into()));
        state.update(Message::UploadRequested);

        let effects = state.update(Message::UploadFinished {
            filename: "report.pdf".into(),
            result: Err(network_error()),
        });
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::DismissToastAfter { .. }));
        assert!(!state.loading);
        assert_eq!(state.files, vec![record("1", "a")]);
        assert_eq!(toast_texts(&state), vec![(LogLevel::Error, "Failed to upload report.pdf")]);
        assert_eq!(state.upload_path, "report.pdf");
    }

    #[test]
    fn blank_path_does_nothing() {
        let mut state = loaded(vec![]);
        state.update(Message::UploadPathChanged("   ".into()));
        assert!(state.update(Message::UploadRequested).is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn upload_ignored_while_loading() {
        let (mut state, _) = FileAppState::startup(&ClientConfig::default());
        state.update(Message::UploadPathChanged("a.txt".into()));
        assert!(state.update(Message::UploadRequested).is_empty());
    }

    #[test]
    fn refresh_during_upload_keeps_uploads_serialized() {
        let mut state = loaded(vec![]);
        state.update(Message::UploadPathChanged("a.txt".into()));
        assert_eq!(state.update(Message::UploadRequested).len(), 1);

        state.update(Message::Refresh);
        state.update(Message::FilesLoaded(Ok(FileList::default())));
        assert!(!state.loading);
        assert!(state.uploading);
        assert!(!state.can_upload());
        assert!(state.update(Message::UploadRequested).is_empty());

        state.update(Message::UploadFinished { filename: "a.txt".into(), result: Err(network_error()) });
        assert!(!state.uploading);
        assert!(state.can_upload());
        assert_eq!(state.update(Message::UploadRequested).len(), 1);
    }

    #[test]
    fn details_open_modal() {
        let mut state = loaded(vec![record("abc123", "a.txt")]);
        let effects = state.update(Message::ShowDetails("abc123".into()));
        assert_eq!(effects, vec![Effect::FetchDetails { id: "abc123".into() }]);
        assert!(!state.modal_open);

        state.update(Message::DetailsLoaded(Ok(record("abc123", "a.txt"))));
        assert!(state.modal_open);
        assert_eq!(state.modal_file().map(|f| f.id.as_str()), Some("abc123"));
    }

    #[test]
    fn details_failure_keeps_modal_closed() {
        let mut state = loaded(vec![record("abc123", "a.txt")]);
        state.update(Message::ShowDetails("abc123".into()));
        state.update(Message::DetailsLoaded(Err(ApiError::Server { status: 404, detail: "File not found".into() })));
        assert!(!state.modal_open);
        assert!(state.modal_file().is_none());
        assert_eq!(toast_texts(&state), vec![(LogLevel::Error, "Failed to fetch file details")]);
    }

    #[test]
    fn closing_modal_has_no_effects() {
        let mut state = loaded(vec![record("abc123", "a.txt")]);
        state.update(Message::DetailsLoaded(Ok(record("abc123", "a.txt"))));
        assert!(state.update(Message::CloseModal).is_empty());
        assert!(!state.modal_open);
        // stale selection is kept but not shown
        assert!(state.selected_file.is_some());
        assert!(state.modal_file().is_none());
    }

    #[test]
    fn download_outcomes() {
        let mut state = loaded(vec![record("1", "a.txt")]);
        let effects = state.update(Message::Download { id: "1".into(), filename: "a.txt".into() });
        assert_eq!(effects, vec![Effect::Download { id: "1".into(), filename: "a.txt".into() }]);

        state.update(Message::DownloadTriggered { filename: "a.txt".into(), result: Ok(()) });
        state.update(Message::DownloadTriggered {
            filename: "a.txt".into(),
            result: Err(ApiError::Launch("no browser".into())),
        });
        assert_eq!(
            toast_texts(&state),
            vec![(LogLevel::Success, "Downloading a.txt"), (LogLevel::Error, "Failed to download a.txt")]
        );
    }

    #[test]
    fn toasts_dismiss_by_id() {
        let mut state = loaded(vec![]);
        state.update(Message::DownloadTriggered { filename: "a".into(), result: Ok(()) });
        state.update(Message::DownloadTriggered { filename: "b".into(), result: Ok(()) });
        state.update(Message::DismissToast(0));
        assert_eq!(toast_texts(&state), vec![(LogLevel::Success, "Downloading b")]);
    }
}
