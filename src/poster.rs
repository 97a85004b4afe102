//! Video posters.
//!
//! A video media item may carry a poster image. When it does, rendered
//! `<video>` elements show it, and the item's thumbnail follows it.

use crate::family::is_posterless_video;
use crate::node::Document;
use crate::transform::Transform;

/// Sets `poster` on every `<video>` that has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPosterTransform {
    pub poster_url: String,
}

impl VideoPosterTransform {
    pub fn new(poster_url: impl Into<String>) -> Self {
        Self {
            poster_url: poster_url.into(),
        }
    }
}

impl Transform for VideoPosterTransform {
    fn name(&self) -> &'static str {
        "video-poster"
    }

    fn transform(self, mut doc: Document) -> Document {
        if self.poster_url.is_empty() {
            return doc;
        }

        let mut applied = 0usize;
        doc.for_each_element_mut(|elem| {
            if is_posterless_video(&elem.tag, &elem.attrs) {
                elem.set_attr("poster", self.poster_url.as_str());
                applied += 1;
            }
        });
        tracing::debug!(poster = %self.poster_url, applied, "applied video poster");
        doc
    }
}

/// What to do with a media item's thumbnail when it is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailAction {
    /// Use the poster as the thumbnail
    UsePoster,
    /// The poster was removed; go back to the default thumbnail
    RestoreDefault,
    /// Leave the thumbnail alone
    Keep,
}

/// Decide the thumbnail from the poster now and before the edit.
/// Empty strings count as no poster.
pub fn thumbnail_action(poster_now: Option<&str>, poster_before: Option<&str>) -> ThumbnailAction {
    let is_set = |p: Option<&str>| p.is_some_and(|p| !p.is_empty());

    if is_set(poster_now) {
        ThumbnailAction::UsePoster
    } else if is_set(poster_before) {
        ThumbnailAction::RestoreDefault
    } else {
        ThumbnailAction::Keep
    }
}
