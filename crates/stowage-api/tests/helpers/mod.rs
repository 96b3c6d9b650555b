//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p stowage-api`.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::path::Path;
use stowage_api::constants;
use stowage_api::setup::{build_state, routes};
use stowage_core::Config;
use tempfile::TempDir;

pub const DOWNLOAD_BASE: &str = "http://localhost:4000";

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server plus the temporary storage root it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
    pub storage_root: std::path::PathBuf,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Path of a stored file relative to the storage root
    pub fn stored(&self, relative: &str) -> std::path::PathBuf {
        self.storage_root.join(relative)
    }
}

/// Setup test app backed by local storage in a fresh temp dir.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let storage_root = temp_dir.path().join("static");

    let config = Config {
        storage_root: storage_root.clone(),
        download_base_url: DOWNLOAD_BASE.to_string(),
        ..Config::default()
    };

    let state = build_state(&config)
        .await
        .expect("Failed to build app state");
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
        storage_root,
    }
}

/// Multipart form with a single `file` part.
pub fn file_form(file_name: &str, mime_type: &str, data: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data.to_vec())
            .file_name(file_name)
            .mime_type(mime_type),
    )
}

/// Whether any file exists below `dir` (recursively).
pub fn contains_files(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let path = entry.path();
        path.is_file() || (path.is_dir() && contains_files(&path))
    })
}
