/// Upload cap per image, enforced at the multipart boundary.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Advisory whitelist for upload file names. The decoder has the final say;
/// an unlisted extension only earns a warning.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "bmp", "tiff", "gif", "jfif",
];

pub fn extension_is_accepted(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelisted_extensions_are_accepted_case_insensitively() {
        assert!(extension_is_accepted("dinner.png"));
        assert!(extension_is_accepted("dinner.JPEG"));
        assert!(extension_is_accepted("photo.2024.jfif"));
    }

    #[test]
    fn unlisted_or_missing_extensions_are_flagged() {
        assert!(!extension_is_accepted("dinner.svg"));
        assert!(!extension_is_accepted("dinner"));
    }
}
