//! Shared constants for the HTTP API.

/// Prefix for every versioned API route.
pub const API_PREFIX: &str = "/api/v0";

/// Multipart field that carries the uploaded file.
pub const FILE_FIELD: &str = "file";
