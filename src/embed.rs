//! `<media>` embed elements.
//!
//! Authors embed media items by name:
//!
//! ```html
//! <media name="Lighthouse" align="left" caption="At dusk"></media>
//! ```
//!
//! Options that are not given fall back to defaults. A caption changes the
//! rendered output, so it also contributes to the cache key.

use thiserror::Error;

use crate::hash::StableHasher;
use crate::node::{Element, Text};

/// Tag of embed elements
pub const EMBED_TAG: &str = "media";

/// Class of the hidden element carrying the rendered caption
pub const CAPTION_CLASS: &str = "omnipedia-media-caption-rendered";

const DEFAULT_ALIGN: &str = "right";
const DEFAULT_STYLE: &str = "framed";
const DEFAULT_VIEW_MODE: &str = "omnipedia_embedded";

/// Errors resolving a `<media>` element
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    #[error("cannot find the name attribute")]
    MissingName,

    #[error("cannot find any media with the name {name:?}")]
    NotFound { name: String },
}

/// A media item known to the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub name: String,
    /// Media type, e.g. `image` or `video`
    pub bundle: String,
}

impl MediaItem {
    pub fn new(name: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle: bundle.into(),
        }
    }
}

/// Lookup of media items by name.
pub trait MediaLibrary {
    /// Every item with exactly this name, in storage order
    fn find_by_name(&self, name: &str) -> Vec<&MediaItem>;
}

impl MediaLibrary for [MediaItem] {
    fn find_by_name(&self, name: &str) -> Vec<&MediaItem> {
        self.iter().filter(|item| item.name == name).collect()
    }
}

impl MediaLibrary for Vec<MediaItem> {
    fn find_by_name(&self, name: &str) -> Vec<&MediaItem> {
        self.as_slice().find_by_name(name)
    }
}

// =============================================================================
// MediaEmbed
// =============================================================================

/// Options of one `<media>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEmbed {
    /// Trimmed item name
    pub name: String,
    pub align: String,
    pub style: String,
    pub view_mode: String,
    pub caption: Option<String>,
}

impl MediaEmbed {
    pub fn from_element(elem: &Element) -> Result<Self, EmbedError> {
        let name = elem.get_attr("name").ok_or(EmbedError::MissingName)?.trim();
        let option = |attr: &str, default: &str| elem.get_attr(attr).unwrap_or(default).to_string();

        Ok(Self {
            name: name.to_string(),
            align: option("align", DEFAULT_ALIGN),
            style: option("style", DEFAULT_STYLE),
            view_mode: option("view-mode", DEFAULT_VIEW_MODE),
            caption: elem.get_attr("caption").map(str::to_string),
        })
    }

    /// Find the embedded item. With several items of the same name, the
    /// first one wins.
    pub fn resolve<'l, L>(&self, library: &'l L) -> Result<&'l MediaItem, EmbedError>
    where
        L: MediaLibrary + ?Sized,
    {
        let found = library.find_by_name(&self.name);
        if found.len() > 1 {
            tracing::warn!(name = %self.name, count = found.len(), "media name is ambiguous, using the first");
        }
        found.into_iter().next().ok_or_else(|| EmbedError::NotFound {
            name: self.name.clone(),
        })
    }

    /// Cache key component distinguishing differently-captioned embeds of
    /// the same item.
    pub fn caption_cache_key(&self) -> Option<String> {
        let caption = self.caption.as_deref()?;
        let hash = StableHasher::new().update(caption.as_bytes()).finish_hex();
        Some(format!("caption-hash:{hash}"))
    }

    /// Hidden element carrying the caption markup, picked up client-side.
    pub fn caption_element(&self) -> Option<Element> {
        let caption = self.caption.as_deref()?;
        let mut elem = Element::new("div")
            .with_class(CAPTION_CLASS)
            .attr("hidden", "");
        elem.push_text(Text::raw(format!("\n\n{caption}\n\n")));
        Some(elem)
    }

    /// Attach the caption to a rendered media element: `data-caption` plus
    /// the hidden caption child.
    pub fn apply_caption(&self, rendered: &mut Element) {
        let Some(caption_elem) = self.caption_element() else {
            return;
        };
        if let Some(caption) = &self.caption {
            rendered.set_attr("data-caption", caption.as_str());
        }
        rendered.push_elem(caption_elem);
    }
}
