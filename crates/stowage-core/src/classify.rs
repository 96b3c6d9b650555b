//! Upload classification
//!
//! The type classifier maps a declared content type to an [`ExtensionTag`]; the
//! extension gate checks the result against the caller's allow-list. Neither looks
//! at file contents: the client-supplied content type is trusted as-is.

use std::collections::HashSet;

use crate::error::AppError;
use crate::models::{ExtensionTag, FileRecord};

/// Set of extensions a caller accepts for one upload.
pub type AllowList = HashSet<ExtensionTag>;

/// Classify `content_type` and record it on `record`.
///
/// The MIME string is recorded even when it is not recognised; the extension is
/// only set on a match.
pub fn check_file_type(
    content_type: &str,
    record: &mut FileRecord,
) -> Result<ExtensionTag, AppError> {
    record.mime_type = content_type.to_string();

    let extension =
        ExtensionTag::from_mime(content_type).ok_or_else(|| AppError::unsupported(content_type))?;
    record.extension = Some(extension);

    Ok(extension)
}

/// Whether the record's extension is in `allowed`.
///
/// An unclassified record or an empty allow-list never passes.
pub fn upload_condition(record: &FileRecord, allowed: &AllowList) -> bool {
    record
        .extension
        .map(|extension| allowed.contains(&extension))
        .unwrap_or(false)
}

/// Build an allow-list from any iterator of tags.
pub fn allow_list<I>(tags: I) -> AllowList
where
    I: IntoIterator<Item = ExtensionTag>,
{
    tags.into_iter().collect()
}

/// Raster image kinds.
pub fn images() -> AllowList {
    allow_list([ExtensionTag::Png, ExtensionTag::Jpg, ExtensionTag::Jpeg])
}

/// Office documents and PDF.
pub fn documents() -> AllowList {
    allow_list([
        ExtensionTag::Ppt,
        ExtensionTag::Pptx,
        ExtensionTag::Doc,
        ExtensionTag::Docx,
        ExtensionTag::Xls,
        ExtensionTag::Xlsx,
        ExtensionTag::Pdf,
    ])
}

pub fn spreadsheets() -> AllowList {
    allow_list([ExtensionTag::Xls, ExtensionTag::Xlsx])
}
