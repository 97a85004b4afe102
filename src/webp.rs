//! WebP derivative URL rewriting.
//!
//! Given one image URL, derive the URL of its WebP-encoded derivative by
//! replacing the file extension of the final path segment with `webp`.
//! Query string and fragment are carried over unchanged. This is purely
//! syntactic: nothing checks that the derivative exists, which requires a
//! WebP conversion pipeline to be active on the server.
//!
//! Only the final path segment is looked at: a dot in a directory name is
//! not an extension, so `/v1.2/readme` has none and fails rather than
//! becoming `/v1.webp`.
//!
//! ```
//! use media_vdom::webp::image_url_to_webp;
//!
//! assert_eq!(
//!     image_url_to_webp("https://x/img/photo.JPG?w=200#frag").unwrap(),
//!     "https://x/img/photo.webp?w=200#frag",
//! );
//! assert!(image_url_to_webp("https://x/img/noext").is_err());
//! ```

use thiserror::Error;

/// Extension every derivative URL ends up with
pub const WEBP_EXTENSION: &str = "webp";

/// Failure to derive a WebP URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebpError {
    /// The final path segment has no `.`, so this is not a file path
    #[error("not a file path, no extension in {path:?}")]
    NoExtension {
        /// The path that was inspected
        path: String,
    },
}

// =============================================================================
// URL splitting
// =============================================================================

/// A URL split into independently handled components.
///
/// `base` is scheme plus authority (`https://host:port`, or `//host` for
/// protocol-relative URLs) and is empty for relative references. `query`
/// and `fragment` exclude their `?` / `#` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub base: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl<'a> UrlParts<'a> {
    /// Split `url` per generic URL syntax: fragment at the first `#`, query
    /// at the first `?` before it, authority up to the first `/` after `//`.
    pub fn split(url: &'a str) -> Self {
        let (rest, fragment) = url.split_once('#').unwrap_or((url, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
        let base_len = authority_len(rest);
        Self {
            base: &rest[..base_len],
            path: &rest[base_len..],
            query,
            fragment,
        }
    }

    /// Reassemble with a replacement path. Empty query and fragment are
    /// dropped together with their markers.
    pub fn with_path(&self, path: &str) -> String {
        let mut out = String::with_capacity(
            self.base.len() + path.len() + self.query.len() + self.fragment.len() + 2,
        );
        out.push_str(self.base);
        out.push_str(path);
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(self.query);
        }
        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(self.fragment);
        }
        out
    }
}

fn authority_len(s: &str) -> usize {
    let authority_start = match s.find("://") {
        Some(i) if is_scheme(&s[..i]) => i + 3,
        _ if s.starts_with("//") => 2,
        _ => return 0,
    };
    s[authority_start..]
        .find('/')
        .map_or(s.len(), |i| authority_start + i)
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// =============================================================================
// Extension handling
// =============================================================================

fn last_segment_start(path: &str) -> usize {
    path.rfind('/').map_or(0, |i| i + 1)
}

/// File extension of a URL path's final segment, as a browser script would
/// read it: the text after the last `.`, or `""` when the segment has no
/// dot or only a leading one (`.htaccess`).
pub fn file_extension(path: &str) -> &str {
    let segment = &path[last_segment_start(path)..];
    match segment.rfind('.') {
        None | Some(0) => "",
        Some(dot) => &segment[dot + 1..],
    }
}

/// Replace the extension of `path`'s final segment with `webp`.
///
/// The prefix up to and including the last `.` keeps its original case.
pub fn path_to_webp(path: &str) -> Result<String, WebpError> {
    let segment_start = last_segment_start(path);
    let dot = path[segment_start..]
        .rfind('.')
        .ok_or_else(|| WebpError::NoExtension {
            path: path.to_string(),
        })?;
    let keep = segment_start + dot + 1;

    let mut out = String::with_capacity(keep + WEBP_EXTENSION.len());
    out.push_str(&path[..keep]);
    out.push_str(WEBP_EXTENSION);
    Ok(out)
}

/// Convert an image URL to the URL of its WebP derivative.
///
/// Fails only when the path's final segment has no `.`.
pub fn image_url_to_webp(url: &str) -> Result<String, WebpError> {
    let parts = UrlParts::split(url);
    let path = path_to_webp(parts.path)?;
    Ok(parts.with_path(&path))
}

/// Whether `url`'s path ends in a `.webp` file (case-insensitive)
pub fn is_webp(url: &str) -> bool {
    file_extension(UrlParts::split(url).path).eq_ignore_ascii_case(WEBP_EXTENSION)
}
