pub mod file_browser;
pub mod file_details;
pub mod logger;
