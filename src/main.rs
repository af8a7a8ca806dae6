use filebox::client::config::ClientConfig;
use filebox::client::gui::app::FileApp;
use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let cfg = ClientConfig::from_env();
    log::info!("API base URL: {}", cfg.api_base_url);
    FileApp::run(iced::Settings::with_flags(cfg))
}
