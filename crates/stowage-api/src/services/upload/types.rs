//! Types used by the upload pipeline

use stowage_storage::UploadReader;

/// An incoming upload as handed over by the HTTP layer.
pub struct UploadedFile<'a> {
    /// File name as sent by the client
    pub file_name: String,
    /// Declared content type (first header value)
    pub content_type: String,
    /// Upload body
    pub reader: UploadReader<'a>,
}

impl<'a> UploadedFile<'a> {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        reader: UploadReader<'a>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            reader,
        }
    }
}

impl UploadedFile<'static> {
    /// Upload backed by an in-memory buffer
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self::new(file_name, content_type, Box::pin(std::io::Cursor::new(data)))
    }
}

impl std::fmt::Debug for UploadedFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}
