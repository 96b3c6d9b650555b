//! Upload pipeline
//!
//! classify → gate → store, stopping at the first failure.

mod policy;
mod service;
mod traits;
mod types;

pub use policy::UploadPolicy;
pub use service::{upload_file, UploadService};
pub use traits::UploadCapabilities;
pub use types::UploadedFile;
