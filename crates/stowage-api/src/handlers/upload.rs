use crate::constants::FILE_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::upload_file;
use crate::state::AppState;
use crate::utils::upload::uploaded_file_from_field;
use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use stowage_core::{AppError, Destination, FileRecord};

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Comma-separated extensions narrowing the destination's allow-list
    extensions: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/uploads/{destination}",
    tag = "uploads",
    params(
        ("destination" = String, Path, description = "Destination slug, e.g. 'profile_images'"),
        ("extensions" = Option<String>, Query, description = "Comma-separated extensions narrowing the destination's allow-list")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = FileRecord),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 415, description = "File type not supported for this destination", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Path(destination): Path<String>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<FileRecord>, HttpAppError> {
    let destination: Destination = destination
        .parse()
        .map_err(|e: anyhow::Error| AppError::InvalidInput(e.to_string()))?;
    let allowed = state
        .policy
        .allow_list_for(destination, query.extensions.as_deref())?;

    // The first part named `file` is the upload; anything before it is skipped.
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let upload = uploaded_file_from_field(field);
        tracing::debug!(
            destination = %destination,
            original_filename = %upload.file_name,
            content_type = %upload.content_type,
            "Processing upload"
        );

        let mut record = FileRecord::default();
        upload_file(&state.uploads, upload, destination, &allowed, &mut record).await?;
        return Ok(Json(record));
    }

    Err(AppError::InvalidInput(format!(
        "No file provided; send a multipart field named '{}'",
        FILE_FIELD
    ))
    .into())
}
