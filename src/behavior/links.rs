//! Lightbox derivative-link rewriting.
//!
//! Media embeds render as
//!
//! ```html
//! <div class="omnipedia-media">
//!   <a data-photoswipe-src="https://host/files/full.jpg">
//!     <img srcset="thumb.webp 1x, thumb.jpg 1x" ...>
//!   </a>
//! </div>
//! ```
//!
//! When the browser chose a WebP thumbnail (its `currentSrc` ends in
//! `.webp`), the lightbox should open the WebP derivative of the full image
//! too. Per anchor+thumbnail pair:
//!
//! ```text
//! Unprocessed ──attach, complete──────────► Resolved | Skipped
//! Unprocessed ──attach, loading──► Pending ──load──► Resolved | Skipped
//! Pending ──detach──► Unprocessed   (listener removed by handle)
//! Resolved ──detach──► Unprocessed  (original target restored verbatim)
//! ```
//!
//! The original target of a resolved anchor is kept in a side table keyed
//! by the anchor's [`StableId`]; there is at most one backup per anchor.
//! Ids are structural, so a re-rendered anchor can reuse an old anchor's id.
//! A backup therefore also records the value written, and only counts while
//! the anchor still carries that value: a stale backup is dropped, never
//! restored onto an element whose target this behavior did not write.
//!
//! WebP detection on the current source is case-insensitive, so a
//! `.WEBP` thumbnail qualifies too.

use rustc_hash::{FxHashMap, FxHashSet};
use url::Url;

use crate::config::MediaConfig;
use crate::family::ImageFormat;
use crate::id::StableId;
use crate::node::Element;
use crate::webp::path_to_webp;

use super::page::{ListenerHandle, LoadEvent, Page};
use super::Behavior;

/// Lifecycle state of one anchor+thumbnail pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    /// Not attached, or detached since
    Unprocessed,
    /// Waiting for the thumbnail to load
    Pending,
    /// Target rewritten, backup held
    Resolved,
    /// Attempted and left untouched
    Skipped,
}

/// Why a pair was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Thumbnail has no resolved source (not loaded, failed, or empty)
    NoCurrentSource,
    /// Resolved source is not an absolute URL
    UnparseableCurrentSource,
    /// Resolved source is not a WebP file
    NotWebp,
    /// Anchor lost its target attribute or vanished
    MissingTarget,
    /// Target is not an absolute URL
    UnparseableTarget,
    /// Target path has no extension to replace
    NoTargetExtension,
}

/// Counters for one `attach` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachReport {
    /// Qualifying pairs found below the context
    pub found: usize,
    pub resolved: usize,
    pub skipped: usize,
    /// Listeners registered
    pub pending: usize,
    /// Pairs already resolved or pending, left as they were
    pub unchanged: usize,
}

/// Counters for one `detach` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetachReport {
    /// Targets restored from backup
    pub restored: usize,
    /// Pending listeners removed
    pub listeners_removed: usize,
}

#[derive(Debug, Clone)]
struct Backup {
    original: String,
    rewritten: String,
}

#[derive(Debug, Clone, Copy)]
struct PendingPair {
    handle: ListenerHandle,
    image: StableId,
}

#[derive(Debug, Clone, Copy)]
struct Pair {
    anchor: StableId,
    thumbnail: StableId,
}

// =============================================================================
// DerivativeLinks
// =============================================================================

/// Behavior pointing lightbox targets at WebP derivatives.
#[derive(Debug, Clone)]
pub struct DerivativeLinks {
    container_class: String,
    target_attr: String,
    /// anchor → original target (verbatim) and the value written over it
    backups: FxHashMap<StableId, Backup>,
    /// anchor → registered listener
    pending: FxHashMap<StableId, PendingPair>,
    /// handle → anchor, for event lookup
    handles: FxHashMap<ListenerHandle, StableId>,
    skipped: FxHashSet<StableId>,
}

impl Default for DerivativeLinks {
    fn default() -> Self {
        Self::new(&MediaConfig::default())
    }
}

impl DerivativeLinks {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            container_class: config.container_class.clone(),
            target_attr: config.target_attr.clone(),
            backups: FxHashMap::default(),
            pending: FxHashMap::default(),
            handles: FxHashMap::default(),
            skipped: FxHashSet::default(),
        }
    }

    /// State of the pair whose anchor is `anchor`
    pub fn state(&self, anchor: StableId) -> PairState {
        if self.backups.contains_key(&anchor) {
            PairState::Resolved
        } else if self.pending.contains_key(&anchor) {
            PairState::Pending
        } else if self.skipped.contains(&anchor) {
            PairState::Skipped
        } else {
            PairState::Unprocessed
        }
    }

    /// Original target stored for a resolved anchor
    pub fn backup(&self, anchor: StableId) -> Option<&str> {
        self.backups.get(&anchor).map(|b| b.original.as_str())
    }

    /// Number of anchors currently holding a backup
    pub fn backup_count(&self) -> usize {
        self.backups.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Process every qualifying pair below `context`.
    ///
    /// Resolved and pending pairs are left alone, so attaching twice never
    /// registers a second listener or overwrites a backup with an already
    /// rewritten value.
    pub fn attach_pairs(&mut self, page: &mut Page, context: StableId) -> AttachReport {
        let pairs = self.find_pairs(page, context);
        let mut report = AttachReport {
            found: pairs.len(),
            ..Default::default()
        };

        for pair in pairs {
            self.drop_stale_backup(page, pair.anchor);
            match self.state(pair.anchor) {
                PairState::Resolved | PairState::Pending => {
                    report.unchanged += 1;
                    continue;
                }
                PairState::Unprocessed | PairState::Skipped => {}
            }

            if page.image_state(pair.thumbnail).complete {
                if self.resolve(page, pair) {
                    report.resolved += 1;
                } else {
                    report.skipped += 1;
                }
            } else {
                let handle = page.add_load_listener(pair.thumbnail);
                self.pending.insert(
                    pair.anchor,
                    PendingPair {
                        handle,
                        image: pair.thumbnail,
                    },
                );
                self.handles.insert(handle, pair.anchor);
                tracing::trace!(anchor = %pair.anchor, image = %pair.thumbnail, "waiting for thumbnail load");
                report.pending += 1;
            }
        }

        tracing::debug!(
            context = %context,
            found = report.found,
            resolved = report.resolved,
            skipped = report.skipped,
            pending = report.pending,
            "attached derivative links"
        );
        report
    }

    /// Undo [`attach_pairs`](Self::attach_pairs) below `context`: remove
    /// pending listeners and restore original targets.
    ///
    /// Anchors that no longer exist in the document anywhere are dropped
    /// from the side tables as well, with their listeners removed.
    pub fn detach_pairs(&mut self, page: &mut Page, context: StableId) -> DetachReport {
        let mut report = DetachReport::default();

        let anchors: Vec<StableId> = self
            .find_pairs(page, context)
            .into_iter()
            .map(|pair| pair.anchor)
            .collect();
        for anchor in anchors {
            self.release(page, anchor, &mut report);
        }

        let orphaned: Vec<StableId> = self
            .pending
            .keys()
            .chain(self.backups.keys())
            .chain(self.skipped.iter())
            .copied()
            .filter(|anchor| page.document().get(*anchor).is_none())
            .collect();
        for anchor in orphaned {
            self.release(page, anchor, &mut report);
        }

        tracing::debug!(
            context = %context,
            restored = report.restored,
            listeners_removed = report.listeners_removed,
            "detached derivative links"
        );
        report
    }

    /// Handle a fired load listener. Unknown handles are ignored.
    pub fn on_load(&mut self, page: &mut Page, event: &LoadEvent) {
        let Some(anchor) = self.handles.remove(&event.handle) else {
            return;
        };
        let Some(pending) = self.pending.remove(&anchor) else {
            return;
        };
        self.resolve(
            page,
            Pair {
                anchor,
                thumbnail: pending.image,
            },
        );
    }

    fn release(&mut self, page: &mut Page, anchor: StableId, report: &mut DetachReport) {
        if let Some(pending) = self.pending.remove(&anchor) {
            self.handles.remove(&pending.handle);
            if page.remove_listener(pending.handle) {
                report.listeners_removed += 1;
            }
        }

        if let Some(backup) = self.backups.remove(&anchor) {
            let elem = page.document_mut().get_mut(anchor);
            match elem {
                Some(elem) if elem.get_attr(&self.target_attr) == Some(backup.rewritten.as_str()) => {
                    elem.set_attr(self.target_attr.as_str(), backup.original);
                    report.restored += 1;
                    tracing::debug!(anchor = %anchor, "restored lightbox target");
                }
                _ => tracing::debug!(anchor = %anchor, "dropped stale lightbox backup"),
            }
        }

        self.skipped.remove(&anchor);
    }

    /// Forget a backup whose anchor no longer carries the rewritten target,
    /// e.g. because the subtree was re-rendered without a detach.
    fn drop_stale_backup(&mut self, page: &Page, anchor: StableId) {
        let Some(backup) = self.backups.get(&anchor) else {
            return;
        };
        let current = page
            .document()
            .get(anchor)
            .and_then(|elem| elem.get_attr(&self.target_attr));
        if current != Some(backup.rewritten.as_str()) {
            tracing::debug!(anchor = %anchor, "dropped stale lightbox backup");
            self.backups.remove(&anchor);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rewriting
    // ─────────────────────────────────────────────────────────────────────────

    /// Attempt the rewrite; records the pair as resolved or skipped.
    fn resolve(&mut self, page: &mut Page, pair: Pair) -> bool {
        match self.rewrite(page, pair) {
            Ok(()) => {
                self.skipped.remove(&pair.anchor);
                true
            }
            Err(reason) => {
                tracing::debug!(anchor = %pair.anchor, ?reason, "left lightbox target unchanged");
                self.skipped.insert(pair.anchor);
                false
            }
        }
    }

    fn rewrite(&mut self, page: &mut Page, pair: Pair) -> Result<(), SkipReason> {
        let state = page.image_state(pair.thumbnail);
        let current_src = state.resolved_src().ok_or(SkipReason::NoCurrentSource)?;
        let current =
            Url::parse(current_src).map_err(|_| SkipReason::UnparseableCurrentSource)?;
        if ImageFormat::from_path(current.path()) != ImageFormat::Webp {
            return Err(SkipReason::NotWebp);
        }

        let anchor = page
            .document_mut()
            .get_mut(pair.anchor)
            .ok_or(SkipReason::MissingTarget)?;
        let original = anchor
            .get_attr(&self.target_attr)
            .ok_or(SkipReason::MissingTarget)?
            .to_string();
        let mut target = Url::parse(&original).map_err(|_| SkipReason::UnparseableTarget)?;
        let path = path_to_webp(target.path()).map_err(|_| SkipReason::NoTargetExtension)?;
        target.set_path(&path);

        // every check passed, mutate
        let rewritten = target.to_string();
        anchor.set_attr(self.target_attr.as_str(), rewritten.as_str());
        tracing::debug!(
            anchor = %pair.anchor,
            current_src,
            target = rewritten.as_str(),
            "pointed lightbox target at webp derivative"
        );
        self.backups.insert(pair.anchor, Backup { original, rewritten });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Anchors with a target attribute that sit inside a media container
    /// and strictly below `context`, each with its first descendant `<img>`.
    fn find_pairs(&self, page: &Page, context: StableId) -> Vec<Pair> {
        let mut pairs = Vec::new();
        self.collect_pairs(&page.document().root, false, false, context, &mut pairs);
        pairs
    }

    fn collect_pairs(
        &self,
        elem: &Element,
        in_container: bool,
        in_context: bool,
        context: StableId,
        pairs: &mut Vec<Pair>,
    ) {
        if in_container && in_context && elem.tag == "a" && elem.has_attr(&self.target_attr) {
            if let Some(thumbnail) = elem.find_descendant(|e| e.tag == "img") {
                pairs.push(Pair {
                    anchor: elem.id,
                    thumbnail: thumbnail.id,
                });
            }
        }

        let child_in_container = in_container || elem.has_class(&self.container_class);
        let child_in_context = in_context || elem.id == context;
        for child in elem.children_elements() {
            self.collect_pairs(child, child_in_container, child_in_context, context, pairs);
        }
    }
}

impl Behavior for DerivativeLinks {
    fn name(&self) -> &'static str {
        "omnipedia-media-image"
    }

    fn attach(&mut self, page: &mut Page, context: StableId) {
        self.attach_pairs(page, context);
    }

    fn detach(&mut self, page: &mut Page, context: StableId) {
        self.detach_pairs(page, context);
    }

    fn handle_event(&mut self, page: &mut Page, event: &LoadEvent) {
        self.on_load(page, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::ImageState;
    use crate::node::Document;

    const FULL: &str = "https://wiki.example/files/styles/full/photo.JPG?itok=abc#view";

    fn figure(target: &str) -> Element {
        Element::new("div").with_class("omnipedia-media").child(
            Element::new("a")
                .attr("data-photoswipe-src", target)
                .child(
                    Element::new("img")
                        .attr("srcset", "https://wiki.example/t.webp 1x, https://wiki.example/t.jpg 1x"),
                ),
        )
    }

    fn page_with(target: &str) -> (Page, StableId, StableId, StableId) {
        let page = Page::new(Document::new(Element::new("main").child(figure(target))));
        let root = page.document().root.id;
        let anchor = page.find_id(|e| e.tag == "a").unwrap();
        let img = page.find_id(|e| e.tag == "img").unwrap();
        (page, root, anchor, img)
    }

    fn target(page: &Page, anchor: StableId) -> String {
        page.document()
            .get(anchor)
            .and_then(|a| a.get_attr("data-photoswipe-src"))
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_complete_webp_thumbnail_rewrites_synchronously() {
        let (mut page, root, anchor, img) = page_with(FULL);
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));

        let mut links = DerivativeLinks::default();
        let report = links.attach_pairs(&mut page, root);

        assert_eq!(report.found, 1);
        assert_eq!(report.resolved, 1);
        assert_eq!(links.state(anchor), PairState::Resolved);
        assert_eq!(
            target(&page, anchor),
            "https://wiki.example/files/styles/full/photo.webp?itok=abc#view"
        );
        assert_eq!(links.backup(anchor), Some(FULL));
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn test_pending_until_load() {
        let (mut page, root, anchor, img) = page_with(FULL);
        let mut links = DerivativeLinks::default();

        let report = links.attach_pairs(&mut page, root);
        assert_eq!(report.pending, 1);
        assert_eq!(links.state(anchor), PairState::Pending);
        assert_eq!(target(&page, anchor), FULL);

        page.load_image(img, "https://wiki.example/t.webp", &mut links);
        assert_eq!(links.state(anchor), PairState::Resolved);
        assert!(target(&page, anchor).ends_with("photo.webp?itok=abc#view"));
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn test_non_webp_leaves_target_untouched() {
        let (mut page, root, anchor, img) = page_with(FULL);
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.png"));
        let before = page.document().clone();

        let mut links = DerivativeLinks::default();
        let report = links.attach_pairs(&mut page, root);

        assert_eq!(report.skipped, 1);
        assert_eq!(links.state(anchor), PairState::Skipped);
        assert_eq!(page.document(), &before);
        assert_eq!(links.backup_count(), 0);

        // skipped pairs detach as a no-op
        let report = links.detach_pairs(&mut page, root);
        assert_eq!(report, DetachReport::default());
        assert_eq!(page.document(), &before);
        assert_eq!(links.state(anchor), PairState::Unprocessed);
    }

    #[test]
    fn test_detach_restores_verbatim() {
        let (mut page, root, anchor, img) = page_with(FULL);
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));
        let before = page.document().clone();

        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        assert_ne!(page.document(), &before);

        let report = links.detach_pairs(&mut page, root);
        assert_eq!(report.restored, 1);
        assert_eq!(target(&page, anchor), FULL);
        assert_eq!(page.document(), &before);
        assert_eq!(links.state(anchor), PairState::Unprocessed);

        // and again after a fresh attach
        links.attach_pairs(&mut page, root);
        assert_eq!(links.state(anchor), PairState::Resolved);
        assert_eq!(links.backup(anchor), Some(FULL));
    }

    #[test]
    fn test_reattach_is_idempotent() {
        let (mut page, root, anchor, img) = page_with(FULL);
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));

        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        let rewritten = target(&page, anchor);

        let report = links.attach_pairs(&mut page, root);
        assert_eq!(report.unchanged, 1);
        assert_eq!(links.backup(anchor), Some(FULL));
        assert_eq!(target(&page, anchor), rewritten);
    }

    #[test]
    fn test_reattach_while_pending_does_not_double_register() {
        let (mut page, root, anchor, _img) = page_with(FULL);
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        links.attach_pairs(&mut page, root);
        assert_eq!(page.listener_count(), 1);
        assert_eq!(links.state(anchor), PairState::Pending);
    }

    #[test]
    fn test_detach_before_load_removes_listener() {
        let (mut page, root, anchor, img) = page_with(FULL);
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);

        let report = links.detach_pairs(&mut page, root);
        assert_eq!(report.listeners_removed, 1);
        assert_eq!(page.listener_count(), 0);

        page.load_image(img, "https://wiki.example/t.webp", &mut links);
        assert_eq!(target(&page, anchor), FULL);
        assert_eq!(links.state(anchor), PairState::Unprocessed);
    }

    #[test]
    fn test_stale_event_is_ignored() {
        let (mut page, root, anchor, img) = page_with(FULL);
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);

        // capture the event, detach, then deliver it late
        let events = page.finish_load(img, "https://wiki.example/t.webp");
        links.detach_pairs(&mut page, root);
        for event in &events {
            links.on_load(&mut page, event);
        }
        assert_eq!(target(&page, anchor), FULL);
    }

    #[test]
    fn test_unparseable_urls_skip() {
        // relative current source cannot be parsed as a URL
        let (mut page, root, anchor, img) = page_with(FULL);
        page.set_image_state(img, ImageState::loaded("/t.webp"));
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        assert_eq!(links.state(anchor), PairState::Skipped);
        assert_eq!(target(&page, anchor), FULL);

        // relative target
        let (mut page, root, anchor, img) = page_with("/files/full.jpg");
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        assert_eq!(links.state(anchor), PairState::Skipped);
        assert_eq!(target(&page, anchor), "/files/full.jpg");
    }

    #[test]
    fn test_target_without_extension_skips() {
        let (mut page, root, anchor, img) = page_with("https://wiki.example/files/full");
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        assert_eq!(links.state(anchor), PairState::Skipped);
        assert_eq!(target(&page, anchor), "https://wiki.example/files/full");
    }

    #[test]
    fn test_failed_load_skips() {
        let (mut page, root, anchor, img) = page_with(FULL);
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        let events = page.fail_load(img);
        crate::behavior::dispatch(&mut links, &mut page, &events);
        assert_eq!(links.state(anchor), PairState::Skipped);
        assert_eq!(target(&page, anchor), FULL);
    }

    #[test]
    fn test_links_outside_container_or_context_are_ignored() {
        let root = Element::new("main")
            .child(
                Element::new("a")
                    .attr("data-photoswipe-src", FULL)
                    .child(Element::new("img")),
            )
            .child(Element::new("section").with_id("other").child(figure(FULL)))
            .child(Element::new("section").with_id("target").child(figure(FULL)));
        let mut page = Page::new(Document::new(root));
        let images: Vec<StableId> = page
            .document()
            .find_all(|e| e.tag == "img")
            .iter()
            .map(|e| e.id)
            .collect();
        for img in images {
            page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));
        }
        let context = page.find_id(|e| e.get_attr("id") == Some("target")).unwrap();

        let mut links = DerivativeLinks::default();
        let report = links.attach_pairs(&mut page, context);
        assert_eq!(report.found, 1);
        assert_eq!(links.backup_count(), 1);

        let rewritten = page
            .document()
            .find_all(|e| e.get_attr("data-photoswipe-src").is_some_and(|t| t.contains(".webp")));
        assert_eq!(rewritten.len(), 1);
    }

    #[test]
    fn test_anchor_without_thumbnail_is_not_a_pair() {
        let root = Element::new("div")
            .with_class("omnipedia-media")
            .child(Element::new("a").attr("data-photoswipe-src", FULL));
        let mut page = Page::new(Document::new(Element::new("main").child(root)));
        let context = page.document().root.id;
        let report = DerivativeLinks::default().attach_pairs(&mut page, context);
        assert_eq!(report.found, 0);
    }

    #[test]
    fn test_removed_subtree_drops_pending_listener() {
        let (mut page, root, anchor, _img) = page_with(FULL);
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);

        let figure_id = page.find_id(|e| e.has_class("omnipedia-media")).unwrap();
        page.replace_element(figure_id, Element::new("p").text("gone"));

        let report = links.detach_pairs(&mut page, root);
        assert_eq!(report.listeners_removed, 1);
        assert_eq!(page.listener_count(), 0);
        assert_eq!(links.state(anchor), PairState::Unprocessed);
    }

    #[test]
    fn test_uppercase_webp_source_qualifies() {
        let (mut page, root, anchor, img) = page_with("https://x/full.png");
        page.set_image_state(img, ImageState::loaded("https://x/THUMB.WEBP"));
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        assert_eq!(target(&page, anchor), "https://x/full.webp");
    }

    #[test]
    fn test_rerendered_anchor_does_not_inherit_backup() {
        let (mut page, root, anchor, img) = page_with("https://x/old.jpg");
        page.set_image_state(img, ImageState::loaded("https://x/t.webp"));
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);
        assert_eq!(target(&page, anchor), "https://x/old.webp");

        // re-render with a different target, no detach in between
        let figure_id = page.find_id(|e| e.has_class("omnipedia-media")).unwrap();
        page.replace_element(figure_id, figure("https://x/new.jpg"));
        let new_anchor = page.find_id(|e| e.tag == "a").unwrap();
        assert_eq!(new_anchor, anchor);
        page.set_image_state(img, ImageState::loaded("https://x/t.webp"));

        let report = links.attach_pairs(&mut page, root);
        assert_eq!(report.resolved, 1);
        assert_eq!(target(&page, anchor), "https://x/new.webp");
        assert_eq!(links.backup(anchor), Some("https://x/new.jpg"));

        links.detach_pairs(&mut page, root);
        assert_eq!(target(&page, anchor), "https://x/new.jpg");
    }

    #[test]
    fn test_detach_never_restores_over_foreign_target() {
        let (mut page, root, anchor, img) = page_with("https://x/old.jpg");
        page.set_image_state(img, ImageState::loaded("https://x/t.webp"));
        let mut links = DerivativeLinks::default();
        links.attach_pairs(&mut page, root);

        let figure_id = page.find_id(|e| e.has_class("omnipedia-media")).unwrap();
        page.replace_element(figure_id, figure("https://x/new.jpg"));

        let report = links.detach_pairs(&mut page, root);
        assert_eq!(report.restored, 0);
        assert_eq!(target(&page, anchor), "https://x/new.jpg");
        assert_eq!(links.backup_count(), 0);
    }

    #[test]
    fn test_custom_target_attr() {
        let config = MediaConfig {
            target_attr: "data-lightbox-src".into(),
            ..Default::default()
        };
        let root = Element::new("main").child(
            Element::new("div").with_class("omnipedia-media").child(
                Element::new("a")
                    .attr("data-lightbox-src", "https://x/full.png")
                    .child(Element::new("img")),
            ),
        );
        let mut page = Page::new(Document::new(root));
        let img = page.find_id(|e| e.tag == "img").unwrap();
        page.set_image_state(img, ImageState::loaded("https://x/thumb.webp"));
        let root = page.document().root.id;

        let mut links = DerivativeLinks::new(&config);
        links.attach(&mut page, root);
        let anchor = page.find_id(|e| e.tag == "a").unwrap();
        assert_eq!(
            page.document().get(anchor).unwrap().get_attr("data-lightbox-src"),
            Some("https://x/full.webp")
        );
    }
}
