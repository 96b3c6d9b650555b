//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use stowage_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: &Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.json_logs())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    crate::error::set_production_mode(config.is_production());

    let state = build_state(config).await?;
    let router = routes::setup_routes(config, state.clone())?;

    Ok((state, router))
}

/// Build the shared state (storage backend and upload service) without touching
/// global telemetry, so tests can assemble an app per case.
pub async fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let storage = storage::setup_storage(config).await?;
    Ok(Arc::new(AppState::new(storage)))
}
