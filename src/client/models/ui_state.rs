// Stato UI derivato: cosa mostra la griglia e come si formattano le date
use chrono::{DateTime, Local, NaiveDateTime};
use crate::client::models::file::FileRecord;

pub const EMPTY_PLACEHOLDER: &str = "No files uploaded yet. Click the upload button to get started!";
pub const LOADING_TEXT: &str = "Loading...";

/// What the file area shows for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridContent<'a> {
    Loading,
    Empty,
    Cards(&'a [FileRecord]),
}

/// Render an ISO-8601 timestamp like `Jan 5, 2024, 03:04 PM` in local time.
/// Timestamps without an offset are taken as already local. Anything that
/// doesn't parse is returned as-is.
pub fn format_upload_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %I:%M %p";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.format(DISPLAY).to_string())
        .unwrap_or_else(|| raw.to_string())
}
