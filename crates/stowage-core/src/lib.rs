//! Stowage Core Library
//!
//! This crate provides the domain models, upload classification rules, error types
//! and configuration shared by the storage backends and the HTTP API.

pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use classify::{check_file_type, upload_condition, AllowList};
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Destination, ExtensionTag, FileRecord};
pub use storage_types::StorageBackend;
