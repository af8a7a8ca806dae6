use serde::{Deserialize, Serialize};

/// Server-reported metadata for one stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    /// Storage location on the server side, opaque to the client.
    pub file_path: String,
    /// ISO-8601 timestamp as sent by the server.
    pub upload_date: String,
}

/// Response of the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileList {
    pub files: Vec<FileRecord>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_payload() {
        let body = r#"{
            "total": 2,
            "files": [
                {"id": "b", "filename": "b.txt", "content_type": "text/plain",
                 "file_path": "uploads/b.txt", "upload_date": "2024-01-05T15:04:05.123000"},
                {"id": "a", "filename": "a.png", "content_type": "image/png",
                 "file_path": "uploads/a.png", "upload_date": "2024-01-04T09:00:00"}
            ]
        }"#;
        let list: FileList = serde_json::from_str(body).unwrap();
        assert_eq!(list.total, 2);
        let ids: Vec<_> = list.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
