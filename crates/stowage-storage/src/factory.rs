#[cfg(feature = "storage-local")]
use crate::LocalStorage;
use crate::{Storage, StorageBackend, StorageResult};
use std::sync::Arc;
use stowage_core::Config;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let storage = LocalStorage::new(
                config.storage_root.clone(),
                config.static_url_prefix.clone(),
                config.download_base_url.clone(),
            )
            .await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(crate::StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "storage-local"))]
mod tests {
    use super::*;
    use stowage_core::Destination;

    #[tokio::test]
    async fn test_create_local_storage_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage_root: dir.path().join("static"),
            download_base_url: "http://localhost:4000".to_string(),
            ..Config::default()
        };

        let storage = create_storage(&config).await.unwrap();

        assert_eq!(storage.backend_type(), StorageBackend::Local);
        assert!(dir.path().join("static").is_dir());
        assert_eq!(
            storage.public_url(Destination::ProfileImages, "me.png"),
            "http://localhost:4000/static/files/profile_images/me.png"
        );
    }
}
