//! Media groups: several `<media>` embeds laid out side by side.
//!
//! Each item of a group gets a `--media-group-item-scale` custom property
//! holding its image's aspect ratio, so the stylesheet can size items
//! proportionally. Scaling is all-or-nothing: if any item lacks usable
//! dimensions, no item is touched.

use crate::attr::StyleDecls;
use crate::config::MediaConfig;
use crate::node::{Document, Element};
use crate::transform::Transform;

/// Custom property carrying an item's width/height ratio
pub const ITEM_SCALE_PROPERTY: &str = "--media-group-item-scale";

/// Tag of the embeds inside a group
pub const MEDIA_TAG: &str = "media";

/// View mode forced on group members
pub const GROUP_VIEW_MODE: &str = "omnipedia_embedded_group";

const DEFAULT_ALIGN: &str = "right";

/// Options read from a group element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOptions {
    pub align: String,
    /// Present only when non-empty
    pub caption: Option<String>,
}

impl GroupOptions {
    pub fn from_element(group: &Element) -> Self {
        Self {
            align: group.get_attr("align").unwrap_or(DEFAULT_ALIGN).to_string(),
            caption: group
                .get_attr("caption")
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }
}

/// Force the group layout options onto a member `<media>` element.
pub fn prepare_group_member(media: &mut Element) {
    media.set_attr("align", "none");
    media.set_attr("style", "frameless");
    media.set_attr("view-mode", GROUP_VIEW_MODE);
}

/// Positive integer dimension, `None` for anything else.
fn dimension(value: Option<&str>) -> Option<u32> {
    value?.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

fn item_dimensions(item: &Element) -> Option<(u32, u32)> {
    let img = if item.tag == "img" {
        item
    } else {
        item.find_descendant(|e| e.tag == "img")?
    };
    Some((dimension(img.get_attr("width"))?, dimension(img.get_attr("height"))?))
}

/// Group children that hold media: a `<media>` or `<img>` itself, or an
/// element containing one. Other children (e.g. a caption) are not items.
fn is_item(child: &Element) -> bool {
    let holds_media = |e: &Element| e.tag == MEDIA_TAG || e.tag == "img";
    holds_media(child) || child.find_descendant(holds_media).is_some()
}

/// Set the item scale property on every item, merging into existing
/// `style` declarations.
///
/// Returns `false` and leaves every item untouched if any item has no
/// `<img>` or its `width`/`height` are not positive integers.
pub fn apply_item_scale<'a, I>(items: I) -> bool
where
    I: IntoIterator<Item = &'a mut Element>,
{
    let items: Vec<&mut Element> = items.into_iter().collect();

    let mut ratios = Vec::with_capacity(items.len());
    for item in &items {
        let Some((width, height)) = item_dimensions(item) else {
            tracing::debug!(item = %item.id, "group item without usable dimensions, skipping scale");
            return false;
        };
        ratios.push(f64::from(width) / f64::from(height));
    }

    for (item, ratio) in items.into_iter().zip(ratios) {
        let mut style = StyleDecls::parse(item.get_attr("style").unwrap_or_default());
        style.set(ITEM_SCALE_PROPERTY, ratio.to_string());
        item.set_attr("style", style.serialize());
    }
    true
}

// =============================================================================
// MediaGroupTransform
// =============================================================================

/// Prepares every media group in a document: members get the group layout
/// options and the group's media-holding children get item scales.
#[derive(Debug, Clone)]
pub struct MediaGroupTransform {
    group_tag: String,
}

impl MediaGroupTransform {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            group_tag: config.group_tag.clone(),
        }
    }

    fn process_group(group: &mut Element) {
        Self::prepare_members(group);
        let scaled = apply_item_scale(group.children_elements_mut().filter(|c| is_item(c)));
        tracing::debug!(
            group = %group.id,
            items = group.children_elements().filter(|c| is_item(c)).count(),
            scaled,
            "prepared media group"
        );
    }

    fn prepare_members(elem: &mut Element) {
        for child in elem.children_elements_mut() {
            if child.tag == MEDIA_TAG {
                prepare_group_member(child);
            }
            Self::prepare_members(child);
        }
    }
}

impl Default for MediaGroupTransform {
    fn default() -> Self {
        Self::new(&MediaConfig::default())
    }
}

impl Transform for MediaGroupTransform {
    fn name(&self) -> &'static str {
        "media-group"
    }

    fn transform(self, mut doc: Document) -> Document {
        let tag = self.group_tag.as_str();
        doc.for_each_element_mut(|elem| {
            if elem.tag == tag {
                Self::process_group(elem);
            }
        });
        doc
    }
}
