//! Application state shared by all handlers.

use std::sync::Arc;

use stowage_storage::Storage;

use crate::services::upload::{UploadPolicy, UploadService};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadService,
    pub policy: UploadPolicy,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            uploads: UploadService::new(storage.clone()),
            storage,
            policy: UploadPolicy::default(),
        }
    }
}
