//! `srcset` attribute parsing.
//!
//! Splits a `srcset` value into `(url, descriptor)` candidates, in input
//! order. Parsing is deliberately naive: the value is split on every `,`,
//! so URLs that contain literal commas (`data:` URLs, unencoded commas in
//! paths) are split apart as well.
//!
//! ```
//! use media_vdom::srcset::{self, SrcSetEntry};
//!
//! let entries = srcset::parse("a.jpg 480w, b.jpg 800w");
//! assert_eq!(entries, vec![
//!     SrcSetEntry::new("a.jpg", Some("480w")),
//!     SrcSetEntry::new("b.jpg", Some("800w")),
//! ]);
//! ```

use std::fmt;

/// One candidate of a `srcset` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SrcSetEntry {
    /// Candidate image URL, absolute or relative, never empty
    pub url: String,
    /// Width or density token taken verbatim (`480w`, `2x`), `None` when the
    /// candidate has no descriptor
    pub descriptor: Option<String>,
}

impl SrcSetEntry {
    pub fn new(url: impl Into<String>, descriptor: Option<&str>) -> Self {
        Self {
            url: url.into(),
            descriptor: descriptor.map(str::to_string),
        }
    }

    /// Interpret the descriptor. Unrecognized tokens are reported as
    /// [`Descriptor::Other`], never rejected.
    pub fn kind(&self) -> Descriptor {
        match self.descriptor.as_deref() {
            None => Descriptor::None,
            Some(token) => Descriptor::parse(token),
        }
    }
}

impl fmt::Display for SrcSetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.descriptor {
            Some(d) => write!(f, "{} {}", self.url, d),
            None => f.write_str(&self.url),
        }
    }
}

/// Interpreted form of a candidate descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Descriptor {
    /// No descriptor (equivalent to `1x` for browsers)
    None,
    /// `<n>w`
    Width(u32),
    /// `<n>x`
    Density(f32),
    /// Anything else, including `h` descriptors and malformed numbers
    Other,
}

impl Descriptor {
    fn parse(token: &str) -> Self {
        if let Some(n) = token.strip_suffix('w') {
            n.parse().map_or(Self::Other, Self::Width)
        } else if let Some(n) = token.strip_suffix('x') {
            n.parse().map_or(Self::Other, Self::Density)
        } else {
            Self::Other
        }
    }
}

/// Parse a `srcset` string into its candidates.
///
/// Each comma-separated chunk is trimmed and split at its first whitespace
/// run into url and descriptor. Chunks that are empty after trimming are
/// skipped, so `""` yields no entries and no entry has an empty url.
pub fn parse(srcset: &str) -> Vec<SrcSetEntry> {
    srcset
        .split(',')
        .filter_map(|chunk| {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                return None;
            }
            let (url, descriptor) = match chunk.split_once(char::is_whitespace) {
                Some((url, rest)) => {
                    let rest = rest.trim();
                    (url, (!rest.is_empty()).then_some(rest))
                }
                None => (chunk, None),
            };
            Some(SrcSetEntry::new(url, descriptor))
        })
        .collect()
}

/// Render candidates back to a `srcset` value, joined with `", "`.
pub fn render(entries: &[SrcSetEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
