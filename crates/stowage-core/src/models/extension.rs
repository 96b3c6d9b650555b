use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical file kind accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionTag {
    Png,
    Jpg,
    Jpeg,
    Ppt,
    Pptx,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Pdf,
}

/// Content type to extension table. Matching is exact and case-sensitive.
const MIME_TABLE: &[(&str, ExtensionTag)] = &[
    ("image/png", ExtensionTag::Png),
    ("image/jpg", ExtensionTag::Jpg),
    ("image/jpeg", ExtensionTag::Jpeg),
    ("application/vnd.ms-powerpoint", ExtensionTag::Ppt),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ExtensionTag::Pptx,
    ),
    ("application/msword", ExtensionTag::Doc),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ExtensionTag::Docx,
    ),
    ("application/vnd.ms-excel", ExtensionTag::Xls),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ExtensionTag::Xlsx,
    ),
    ("application/pdf", ExtensionTag::Pdf),
];

impl ExtensionTag {
    pub fn all() -> &'static [ExtensionTag] {
        &[
            ExtensionTag::Png,
            ExtensionTag::Jpg,
            ExtensionTag::Jpeg,
            ExtensionTag::Ppt,
            ExtensionTag::Pptx,
            ExtensionTag::Doc,
            ExtensionTag::Docx,
            ExtensionTag::Xls,
            ExtensionTag::Xlsx,
            ExtensionTag::Pdf,
        ]
    }

    /// Look up the extension for a declared content type.
    pub fn from_mime(content_type: &str) -> Option<ExtensionTag> {
        MIME_TABLE
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, tag)| *tag)
    }

    /// The content type that classifies to this extension.
    pub fn mime_type(&self) -> &'static str {
        MIME_TABLE
            .iter()
            .find(|(_, tag)| tag == self)
            .map(|(mime, _)| *mime)
            .unwrap_or("application/octet-stream")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionTag::Png => "png",
            ExtensionTag::Jpg => "jpg",
            ExtensionTag::Jpeg => "jpeg",
            ExtensionTag::Ppt => "ppt",
            ExtensionTag::Pptx => "pptx",
            ExtensionTag::Doc => "doc",
            ExtensionTag::Docx => "docx",
            ExtensionTag::Xls => "xls",
            ExtensionTag::Xlsx => "xlsx",
            ExtensionTag::Pdf => "pdf",
        }
    }
}

impl FromStr for ExtensionTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_lowercase();
        ExtensionTag::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| anyhow::anyhow!("Unsupported extension: {}", s))
    }
}

impl Display for ExtensionTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_table_covers_every_tag_once() {
        for tag in ExtensionTag::all() {
            let count = MIME_TABLE.iter().filter(|(_, t)| t == tag).count();
            assert_eq!(count, 1, "{} should appear exactly once", tag);
        }
    }

    #[test]
    fn test_from_mime_is_case_sensitive() {
        assert_eq!(ExtensionTag::from_mime("image/png"), Some(ExtensionTag::Png));
        assert_eq!(ExtensionTag::from_mime("IMAGE/PNG"), None);
        assert_eq!(ExtensionTag::from_mime("image/png; charset=binary"), None);
        assert_eq!(ExtensionTag::from_mime(" image/png"), None);
    }

    #[test]
    fn test_jpg_and_jpeg_are_distinct() {
        assert_eq!(ExtensionTag::from_mime("image/jpg"), Some(ExtensionTag::Jpg));
        assert_eq!(ExtensionTag::from_mime("image/jpeg"), Some(ExtensionTag::Jpeg));
    }

    #[test]
    fn test_parse_extension_tag() {
        assert_eq!("pdf".parse::<ExtensionTag>().unwrap(), ExtensionTag::Pdf);
        assert_eq!(".DOCX".parse::<ExtensionTag>().unwrap(), ExtensionTag::Docx);
        assert!("gif".parse::<ExtensionTag>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ExtensionTag::Pptx).unwrap();
        assert_eq!(json, "\"pptx\"");
    }
}
