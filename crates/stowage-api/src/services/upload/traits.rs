//! Capabilities the upload pipeline is built from

use async_trait::async_trait;
use stowage_core::{AllowList, AppError, Destination, FileRecord};

use super::types::UploadedFile;

/// The three steps of an upload.
///
/// [`upload_file`](super::upload_file) only sees this trait, so any step can be
/// replaced (e.g. a different storage backend or a stricter classifier) without
/// touching the orchestration.
#[async_trait]
pub trait UploadCapabilities: Send + Sync {
    /// Classify the declared content type, writing the MIME type and extension
    /// into `record`.
    fn check_file_type(
        &self,
        upload: &UploadedFile<'_>,
        record: &mut FileRecord,
    ) -> Result<(), AppError>;

    /// Whether the classified extension is in `allowed`
    fn upload_condition(&self, record: &FileRecord, allowed: &AllowList) -> bool;

    /// Persist the upload, writing the stored name and URL into `record`
    async fn upload_file_service(
        &self,
        upload: UploadedFile<'_>,
        destination: Destination,
        record: &mut FileRecord,
    ) -> Result<(), AppError>;
}
