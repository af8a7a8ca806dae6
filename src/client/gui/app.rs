use std::sync::Arc;

use iced::{Application, Command, Element, Theme};
use iced_aw::Modal;

use crate::client::config::ClientConfig;
use crate::client::gui::views::{file_browser, file_details};
use crate::client::models::app_state::{Effect, FileAppState};
use crate::client::models::messages::Message;
use crate::client::services::download::{DownloadLauncher, SystemBrowser};
use crate::client::services::error::ApiError;
use crate::client::services::files_service::FilesService;

pub struct FileApp {
    pub state: FileAppState,
    pub files_service: Arc<FilesService>,
    pub launcher: Arc<dyn DownloadLauncher>,
}

impl FileApp {
    fn run_effects(&self, effects: Vec<Effect>) -> Command<Message> {
        Command::batch(effects.into_iter().map(|effect| self.effect_command(effect)))
    }

    fn effect_command(&self, effect: Effect) -> Command<Message> {
        let svc = self.files_service.clone();
        match effect {
            Effect::LoadFiles { skip, limit } => Command::perform(
                async move { svc.list_files(skip, limit).await },
                Message::FilesLoaded,
            ),
            Effect::Upload { path, filename } => Command::perform(
                async move { svc.upload_path(&path).await },
                move |result| Message::UploadFinished { filename, result },
            ),
            Effect::FetchDetails { id } => Command::perform(
                async move { svc.get_file_details(&id).await },
                Message::DetailsLoaded,
            ),
            Effect::Download { id, filename } => {
                let launcher = self.launcher.clone();
                Command::perform(
                    async move {
                        // opening a browser may block briefly
                        tokio::task::spawn_blocking(move || svc.download_file(&id, launcher.as_ref()))
                            .await
                            .unwrap_or_else(|e| Err(ApiError::Launch(e.to_string())))
                    },
                    move |result| Message::DownloadTriggered { filename, result },
                )
            }
            Effect::DismissToastAfter { id, after } => Command::perform(
                async move { tokio::time::sleep(after).await },
                move |_| Message::DismissToast(id),
            ),
        }
    }
}

impl Application for FileApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(cfg: ClientConfig) -> (Self, Command<Message>) {
        let (state, effects) = FileAppState::startup(&cfg);
        let app = FileApp {
            state,
            files_service: Arc::new(FilesService::from_config(&cfg)),
            launcher: Arc::new(SystemBrowser),
        };
        let cmd = app.run_effects(effects);
        (app, cmd)
    }

    fn title(&self) -> String {
        "Simple File Storage".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effects = self.state.update(message);
        self.run_effects(effects)
    }

    fn view(&self) -> Element<Message> {
        let underlay = file_browser::view(&self.state);
        let overlay = self.state.modal_file().map(file_details::view);
        Modal::new(underlay, overlay)
            .backdrop(Message::CloseModal)
            .on_esc(Message::CloseModal)
            .into()
    }
}
