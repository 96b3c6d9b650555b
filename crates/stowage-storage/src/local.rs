use crate::keys::{public_url, sanitize_file_name, storage_key};
use crate::traits::{Storage, StorageError, StorageResult, StoredFile, UploadReader};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use stowage_core::Destination;
use tokio::fs;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
    static_prefix: String,
    download_base: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `root` - Directory holding the destination tree (e.g. "./static")
    /// * `static_prefix` - Public path the root is served under (e.g. "/static")
    /// * `download_base` - Prefix for generated URLs (e.g. "https://files.example.com")
    pub async fn new(
        root: impl Into<PathBuf>,
        static_prefix: impl Into<String>,
        download_base: impl Into<String>,
    ) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            root,
            static_prefix: static_prefix.into(),
            download_base: download_base.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a destination below the storage root
    pub fn destination_dir(&self, destination: Destination) -> PathBuf {
        self.root.join(destination.path_segment())
    }

    /// Resolve a sanitized file name to its path inside the destination directory.
    ///
    /// Names that would leave the destination directory are rejected.
    fn file_path(&self, destination: Destination, file_name: &str) -> StorageResult<PathBuf> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains('/')
            || (cfg!(windows) && file_name.contains('\\'))
        {
            return Err(StorageError::InvalidKey(format!(
                "File name {:?} does not name a file inside {}",
                file_name,
                destination.path_segment()
            )));
        }

        Ok(self.destination_dir(destination).join(file_name))
    }

    /// Create the destination directory when it does not exist yet
    async fn ensure_destination_dir(&self, destination: Destination) -> StorageResult<()> {
        let dir = self.destination_dir(destination);
        if fs::try_exists(&dir).await.unwrap_or(false) {
            return Ok(());
        }

        fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;

        tracing::debug!(path = %dir.display(), "Created destination directory");
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn store_stream(
        &self,
        destination: Destination,
        original_name: &str,
        mut reader: UploadReader<'_>,
    ) -> StorageResult<StoredFile> {
        let file_name = sanitize_file_name(original_name);
        let path = self.file_path(destination, &file_name)?;
        let start = std::time::Instant::now();

        self.ensure_destination_dir(destination).await?;

        let mut file = fs::File::create(&path)
            .await
            .map_err(|source| StorageError::FileCreate {
                path: path.clone(),
                source,
            })?;

        let bytes_copied = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(|source| StorageError::Copy {
                path: path.clone(),
                source,
            })?;

        file.sync_all().await.map_err(|source| StorageError::Copy {
            path: path.clone(),
            source,
        })?;

        let key = storage_key(destination, &file_name);
        let url = public_url(&self.download_base, &self.static_prefix, &key);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok(StoredFile {
            file_name,
            key,
            url,
            size_bytes: bytes_copied,
        })
    }

    async fn exists(&self, destination: Destination, file_name: &str) -> StorageResult<bool> {
        let path = self.file_path(destination, file_name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn public_url(&self, destination: Destination, file_name: &str) -> String {
        public_url(
            &self.download_base,
            &self.static_prefix,
            &storage_key(destination, file_name),
        )
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(all(test, feature = "storage-local"))]
mod tests {
    use super::*;
    use futures::stream;
    use std::io;
    use tempfile::tempdir;
    use tokio_util::io::StreamReader;

    const BASE_URL: &str = "https://files.example.com";

    async fn storage_in(dir: &Path) -> LocalStorage {
        LocalStorage::new(dir.join("static"), "/static", BASE_URL)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        let data: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
        let stored = storage
            .store(Destination::LearningResultFiles, "results.pdf", data.clone())
            .await
            .unwrap();

        assert_eq!(stored.size_bytes, data.len() as u64);
        let path = storage
            .root()
            .join("files/learning_result_files/results.pdf");
        let written = std::fs::read(path).unwrap();
        assert_eq!(written, data);
    }

    #[tokio::test]
    async fn test_store_empty_stream_creates_empty_file() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        let stored = storage
            .store(Destination::ReportTimestamp, "empty.xls", Vec::new())
            .await
            .unwrap();

        assert_eq!(stored.size_bytes, 0);
        assert!(storage
            .exists(Destination::ReportTimestamp, "empty.xls")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_file_name_and_url() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        let stored = storage
            .store(Destination::ProfileImages, "a b.png", b"png".to_vec())
            .await
            .unwrap();

        assert_eq!(stored.file_name, "a_b.png");
        assert_eq!(stored.key, "files/profile_images/a_b.png");
        assert_eq!(
            stored.url,
            "https://files.example.com/static/files/profile_images/a_b.png"
        );
        assert_eq!(
            storage.public_url(Destination::ProfileImages, "a_b.png"),
            stored.url
        );
    }

    #[tokio::test]
    async fn test_missing_nested_destination_is_created() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;
        let destination_dir = storage.destination_dir(Destination::NewsCoverImage);
        assert!(!destination_dir.exists());

        storage
            .store(Destination::NewsCoverImage, "cover.jpg", b"jpg".to_vec())
            .await
            .unwrap();

        assert!(destination_dir.is_dir());
        assert!(destination_dir.join("cover.jpg").is_file());
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        let first = storage
            .store(Destination::DailyWorkImages, "shift 1.jpg", b"first version".to_vec())
            .await
            .unwrap();
        let second = storage
            .store(Destination::DailyWorkImages, "shift 1.jpg", b"second".to_vec())
            .await
            .unwrap();

        assert_eq!(first.key, second.key);
        assert_eq!(first.url, second.url);
        let written = std::fs::read(storage.root().join(&second.key)).unwrap();
        assert_eq!(written, b"second");
    }

    #[tokio::test]
    async fn test_directory_create_failure_is_reported() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        // A regular file where the `files` directory should be.
        std::fs::write(storage.root().join("files"), b"not a directory").unwrap();

        let result = storage
            .store(Destination::ImportInfo, "import.xlsx", b"xlsx".to_vec())
            .await;

        assert!(matches!(result, Err(StorageError::DirectoryCreate { .. })));
    }

    #[tokio::test]
    async fn test_copy_failure_leaves_partial_file() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        let chunks: Vec<io::Result<bytes::Bytes>> = vec![
            Ok(bytes::Bytes::from_static(b"partial ")),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
        ];
        let reader: UploadReader<'_> = Box::pin(StreamReader::new(stream::iter(chunks)));

        let result = storage
            .store_stream(Destination::ReportDailyWork, "report.docx", reader)
            .await;

        match result {
            Err(StorageError::Copy { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::ConnectionReset)
            }
            other => panic!("expected copy error, got {:?}", other),
        }
        assert!(storage
            .exists(Destination::ReportDailyWork, "report.docx")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_names_leaving_destination_are_rejected() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        for name in ["", ".", "..", "../escape.png", "nested/file.png"] {
            let result = storage
                .store(Destination::ProfileImages, name, b"x".to_vec())
                .await;
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_backslash_is_kept_in_file_name() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        let stored = storage
            .store(Destination::ProfileImages, "a b\\c.png", b"png".to_vec())
            .await
            .unwrap();

        assert_eq!(stored.file_name, "a_b\\c.png");
        assert!(storage
            .destination_dir(Destination::ProfileImages)
            .join("a_b\\c.png")
            .is_file());
    }

    #[tokio::test]
    async fn test_exists_for_missing_file() {
        let dir = tempdir().unwrap();
        let storage = storage_in(dir.path()).await;

        assert!(!storage
            .exists(Destination::NewsDocs, "missing.pdf")
            .await
            .unwrap());
    }
}
