//! Data models for uploads
//!
//! Destinations and extension tags are closed sets; `FileRecord` is the per-request
//! output filled in by the upload pipeline.

mod destination;
mod extension;
mod file_record;

pub use destination::Destination;
pub use extension::ExtensionTag;
pub use file_record::FileRecord;
