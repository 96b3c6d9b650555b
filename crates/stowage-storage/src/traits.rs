//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use stowage_core::Destination;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Byte stream of an incoming upload.
pub type UploadReader<'a> = Pin<Box<dyn AsyncRead + Send + 'a>>;

/// Where and under what name a file was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Sanitized file name
    pub file_name: String,
    /// Key relative to the storage root (`{segment}/{file_name}`)
    pub key: String,
    /// Public URL of the file
    pub url: String,
    pub size_bytes: u64,
}

/// Storage abstraction trait
///
/// The upload pipeline only talks to this trait, so the local filesystem backend
/// can be swapped for another one without touching the orchestration code.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Copy `reader` to `<destination>/<sanitized original_name>`, replacing any
    /// existing file of that name.
    ///
    /// The destination directory is created when missing. If the copy fails
    /// midway the partially written file is left in place.
    async fn store_stream(
        &self,
        destination: Destination,
        original_name: &str,
        reader: UploadReader<'_>,
    ) -> StorageResult<StoredFile>;

    /// Store an in-memory buffer. Same semantics as [`Storage::store_stream`].
    async fn store(
        &self,
        destination: Destination,
        original_name: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile> {
        let reader: UploadReader<'_> = Box::pin(std::io::Cursor::new(data));
        self.store_stream(destination, original_name, reader).await
    }

    /// Check if a stored file exists
    async fn exists(&self, destination: Destination, file_name: &str) -> StorageResult<bool>;

    /// Public URL a file stored under `file_name` would be served from
    fn public_url(&self, destination: Destination, file_name: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
