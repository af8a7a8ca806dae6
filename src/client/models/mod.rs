pub mod app_state;
pub mod file;
pub mod messages;
pub mod ui_state;
