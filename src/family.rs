//! Image format detection and media element checks

use crate::webp::file_extension;

// =============================================================================
// Image format
// =============================================================================

/// Raster image encoding, as far as an extension tells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Avif,
    Other,
}

impl ImageFormat {
    /// Infer the format from a URL path's extension (case-insensitive)
    pub fn from_path(path: &str) -> Self {
        let ext = file_extension(path);
        if ext.eq_ignore_ascii_case("webp") {
            Self::Webp
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Self::Jpeg
        } else if ext.eq_ignore_ascii_case("png") {
            Self::Png
        } else if ext.eq_ignore_ascii_case("gif") {
            Self::Gif
        } else if ext.eq_ignore_ascii_case("avif") {
            Self::Avif
        } else {
            Self::Other
        }
    }
}

/// Whether an element is a `<video>` that still needs a poster
pub(crate) fn is_posterless_video(tag: &str, attrs: &[(String, String)]) -> bool {
    tag == "video" && !attrs.iter().any(|(k, _)| k == "poster")
}
