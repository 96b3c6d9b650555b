use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ExtensionTag;

/// Metadata describing a stored upload.
///
/// Starts empty; classification fills `mime_type` and `extension`, storage fills
/// `file_name` and `file_url`. Nothing about the record is persisted, only the
/// bytes on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FileRecord {
    /// Stored file name (spaces replaced with underscores)
    pub file_name: String,
    /// Public URL of the stored file
    pub file_url: String,
    /// Extension derived from the declared content type
    pub extension: Option<ExtensionTag>,
    /// Content type as declared by the client
    pub mime_type: String,
}

impl FileRecord {
    /// Whether the storage stage has written its fields.
    pub fn is_stored(&self) -> bool {
        !self.file_name.is_empty() && !self.file_url.is_empty()
    }
}
