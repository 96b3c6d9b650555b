//! Shared file-name and URL layout for storage backends.

use stowage_core::Destination;

/// Make an uploaded file name safe for the destination directory.
///
/// Only spaces are rewritten (to underscores); every other character is kept.
pub fn sanitize_file_name(original: &str) -> String {
    original.replace(' ', "_")
}

/// Key of a stored file relative to the storage root: `{segment}/{file_name}`.
pub fn storage_key(destination: Destination, file_name: &str) -> String {
    format!("{}/{}", destination.path_segment(), file_name)
}

/// Public URL for a stored file.
///
/// The download base is concatenated verbatim (no separator is added or removed),
/// followed by the static prefix and the storage key.
pub fn public_url(download_base: &str, static_prefix: &str, key: &str) -> String {
    format!(
        "{}{}/{}",
        download_base,
        static_prefix.trim_end_matches('/'),
        key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_every_space() {
        assert_eq!(sanitize_file_name("a b.png"), "a_b.png");
        assert_eq!(sanitize_file_name("  two  spaces .pdf"), "__two__spaces_.pdf");
        assert_eq!(sanitize_file_name("no-spaces.docx"), "no-spaces.docx");
    }

    #[test]
    fn test_sanitize_preserves_other_characters() {
        assert_eq!(sanitize_file_name("ré sumé (1).pdf"), "ré_sumé_(1).pdf");
        assert_eq!(sanitize_file_name("tab\there.png"), "tab\there.png");
        assert_eq!(sanitize_file_name("../x y.png"), "../x_y.png");
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(
            storage_key(Destination::NewsCoverImage, "cover.jpg"),
            "files/news/cover_images/cover.jpg"
        );
    }

    #[test]
    fn test_public_url_concatenates_base_verbatim() {
        let key = storage_key(Destination::ProfileImages, "a_b.png");
        assert_eq!(
            public_url("https://cdn.example.com", "/static", &key),
            "https://cdn.example.com/static/files/profile_images/a_b.png"
        );
        assert_eq!(
            public_url("", "/static/", &key),
            "/static/files/profile_images/a_b.png"
        );
    }
}
