//! Upload service
//!
//! `UploadService` implements the pipeline steps on top of a [`Storage`] backend;
//! [`upload_file`] runs them in order for one request.

use std::sync::Arc;

use async_trait::async_trait;
use stowage_core::{AllowList, AppError, Destination, FileRecord};
use stowage_storage::{Storage, StorageError};

use super::traits::UploadCapabilities;
use super::types::UploadedFile;

/// Run classify → gate → store for one upload.
///
/// Returns at the first failure. A rejected content type (unknown, or known but
/// not allow-listed) is `UnsupportedFileType` and leaves nothing on disk; a
/// storage failure is `StorageWrite`. On success `record` is fully populated.
pub async fn upload_file(
    svc: &dyn UploadCapabilities,
    upload: UploadedFile<'_>,
    destination: Destination,
    allowed: &AllowList,
    record: &mut FileRecord,
) -> Result<(), AppError> {
    svc.check_file_type(&upload, record)?;

    if !svc.upload_condition(record, allowed) {
        tracing::debug!(
            mime_type = %record.mime_type,
            destination = %destination,
            "Upload rejected: extension not allowed for destination"
        );
        return Err(AppError::unsupported(record.mime_type.clone()));
    }

    svc.upload_file_service(upload, destination, record).await
}

/// Local pipeline implementation backed by a storage backend
#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn Storage>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Run the pipeline with a fresh record and return it on success
    pub async fn upload(
        &self,
        upload: UploadedFile<'_>,
        destination: Destination,
        allowed: &AllowList,
    ) -> Result<FileRecord, AppError> {
        let mut record = FileRecord::default();
        upload_file(self, upload, destination, allowed, &mut record).await?;
        Ok(record)
    }
}

#[async_trait]
impl UploadCapabilities for UploadService {
    fn check_file_type(
        &self,
        upload: &UploadedFile<'_>,
        record: &mut FileRecord,
    ) -> Result<(), AppError> {
        stowage_core::check_file_type(&upload.content_type, record).map(|_| ())
    }

    fn upload_condition(&self, record: &FileRecord, allowed: &AllowList) -> bool {
        stowage_core::upload_condition(record, allowed)
    }

    async fn upload_file_service(
        &self,
        upload: UploadedFile<'_>,
        destination: Destination,
        record: &mut FileRecord,
    ) -> Result<(), AppError> {
        if record.extension.is_none() {
            return Err(AppError::Internal(
                "upload stored before its content type was classified".to_string(),
            ));
        }

        let UploadedFile {
            file_name, reader, ..
        } = upload;

        let stored = self
            .storage
            .store_stream(destination, &file_name, reader)
            .await
            .map_err(|e| match e {
                StorageError::InvalidKey(message) => {
                    tracing::debug!(
                        destination = %destination,
                        original_filename = %file_name,
                        "Upload rejected: unusable file name"
                    );
                    AppError::InvalidInput(message)
                }
                e => {
                    tracing::error!(
                        error = %e,
                        destination = %destination,
                        original_filename = %file_name,
                        "Failed to store upload"
                    );
                    AppError::storage_write(e)
                }
            })?;

        tracing::info!(
            destination = %destination,
            file_name = %stored.file_name,
            file_url = %stored.url,
            size_bytes = stored.size_bytes,
            "Upload stored"
        );

        record.file_name = stored.file_name;
        record.file_url = stored.url;
        Ok(())
    }
}
