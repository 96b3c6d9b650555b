//! Common utilities for file upload handlers

use std::io;

use axum::extract::multipart::Field;
use futures::TryStreamExt;
use tokio_util::io::StreamReader;

use crate::services::upload::UploadedFile;

/// Name stored when the client sends no file name
const UNKNOWN_FILENAME: &str = "unknown";

/// Content type assumed when the part carries none
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Turn a multipart field into an upload whose body is streamed straight from the
/// request, without buffering it in memory.
pub fn uploaded_file_from_field(field: Field<'_>) -> UploadedFile<'_> {
    let file_name = field
        .file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_FILENAME)
        .to_string();
    let content_type = field
        .content_type()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let body = field.map_err(io::Error::other);
    UploadedFile::new(file_name, content_type, Box::pin(StreamReader::new(body)))
}
