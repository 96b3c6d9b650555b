//! Stowage API Library
//!
//! This crate provides the upload pipeline, HTTP handlers and application setup.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
pub mod services;
pub mod setup;
pub mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::upload::{
    upload_file, UploadCapabilities, UploadPolicy, UploadService, UploadedFile,
};
