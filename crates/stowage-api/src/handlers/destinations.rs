use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use stowage_core::{Destination, ExtensionTag};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationInfo {
    /// Identifier used in the upload route
    pub slug: String,
    /// Directory below the static root
    pub path: String,
    /// Extensions accepted by default
    pub allowed_extensions: Vec<ExtensionTag>,
}

#[utoipa::path(
    get,
    path = "/api/v0/destinations",
    tag = "uploads",
    responses(
        (status = 200, description = "Upload destinations and their default allow-lists", body = [DestinationInfo])
    )
)]
pub async fn list_destinations(State(state): State<Arc<AppState>>) -> Json<Vec<DestinationInfo>> {
    let destinations = Destination::all()
        .iter()
        .map(|destination| {
            let mut allowed_extensions: Vec<ExtensionTag> =
                state.policy.defaults_for(*destination).into_iter().collect();
            allowed_extensions.sort_by_key(|tag| tag.as_str());

            DestinationInfo {
                slug: destination.slug().to_string(),
                path: destination.path_segment().to_string(),
                allowed_extensions,
            }
        })
        .collect();

    Json(destinations)
}
