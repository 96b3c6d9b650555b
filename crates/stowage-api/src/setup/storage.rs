//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use stowage_core::Config;
use stowage_storage::{create_storage, Storage};

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = %storage.backend_type(),
        root = %config.storage_root.display(),
        static_prefix = %config.static_url_prefix,
        download_base = %config.download_base_url,
        "Storage abstraction initialized successfully"
    );
    Ok(storage)
}
