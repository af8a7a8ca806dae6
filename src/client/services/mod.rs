pub mod download;
pub mod error;
pub mod files_service;
