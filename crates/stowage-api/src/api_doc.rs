use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::destinations::DestinationInfo;
use stowage_core::{Destination, ExtensionTag, FileRecord};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stowage API",
        description = "Single-file uploads into fixed storage destinations"
    ),
    paths(
        crate::handlers::upload::upload,
        crate::handlers::destinations::list_destinations,
    ),
    components(schemas(FileRecord, ExtensionTag, Destination, DestinationInfo, ErrorResponse)),
    tags(
        (name = "uploads", description = "File upload endpoints")
    )
)]
pub struct ApiDoc;
