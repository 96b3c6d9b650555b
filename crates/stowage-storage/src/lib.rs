//! Stowage Storage Library
//!
//! This crate provides the `Storage` abstraction and the local filesystem backend.
//!
//! # Layout
//!
//! Files land at `<root>/<destination segment>/<file name>`, where the segment comes
//! from [`Destination::path_segment`](stowage_core::Destination::path_segment) and the
//! file name is the client's original name with spaces replaced by underscores. The
//! public URL is `<download base><static prefix>/<segment>/<file name>`. Path and URL
//! construction lives in the `keys` module so every backend agrees on it.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::sanitize_file_name;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use stowage_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult, StoredFile, UploadReader};
