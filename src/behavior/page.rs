//! Page model: a document plus the browser-owned state behaviors observe.
//!
//! A real browser decides which `srcset` candidate an `<img>` loads and
//! exposes the result as `currentSrc` once loading finishes. No algorithm
//! here tries to replicate that choice; instead the harness injects it
//! through [`Page::finish_load`], separately from the declared `src` and
//! `srcset` attributes.

use rustc_hash::FxHashMap;

use crate::id::StableId;
use crate::node::{Document, Element};

/// Browser-computed state of one `<img>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
    /// Loading finished (successfully or not)
    pub complete: bool,
    /// The candidate the browser actually chose; `None` until loaded
    pub current_src: Option<String>,
}

impl ImageState {
    /// State of an image that already finished loading `current_src`
    pub fn loaded(current_src: impl Into<String>) -> Self {
        Self {
            complete: true,
            current_src: Some(current_src.into()),
        }
    }

    /// Resolved source if loading produced a non-empty one
    pub fn resolved_src(&self) -> Option<&str> {
        self.current_src.as_deref().filter(|s| !s.is_empty())
    }
}

/// Handle of a registered one-shot load listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(u64);

/// How an image finished loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// A fired load listener, delivered to the behavior that registered it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadEvent {
    pub handle: ListenerHandle,
    pub image: StableId,
    pub outcome: LoadOutcome,
}

// =============================================================================
// Page
// =============================================================================

/// A document together with image load state and load listeners
#[derive(Debug, Clone)]
pub struct Page {
    doc: Document,
    images: FxHashMap<StableId, ImageState>,
    /// handle → image it listens on
    listeners: FxHashMap<ListenerHandle, StableId>,
    next_handle: u64,
}

impl Page {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            images: FxHashMap::default(),
            listeners: FxHashMap::default(),
            next_handle: 1,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access to the document. Call [`Document::reindex`] after
    /// structural edits, or use [`replace_element`](Self::replace_element).
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Id of the first element matching `predicate`
    pub fn find_id<F>(&self, predicate: F) -> Option<StableId>
    where
        F: Fn(&Element) -> bool,
    {
        self.doc.find_element(predicate).map(|e| e.id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Image state
    // ─────────────────────────────────────────────────────────────────────────

    /// Current state of an image; never-touched images are incomplete
    pub fn image_state(&self, image: StableId) -> ImageState {
        self.images.get(&image).cloned().unwrap_or_default()
    }

    /// Set an image's state without firing listeners (e.g. served from
    /// cache before any behavior attached)
    pub fn set_image_state(&mut self, image: StableId, state: ImageState) {
        self.images.insert(image, state);
    }

    /// Mark an image loaded with the candidate the browser chose, and
    /// take every listener registered on it. Listeners are one-shot.
    pub fn finish_load(&mut self, image: StableId, current_src: &str) -> Vec<LoadEvent> {
        self.images.insert(image, ImageState::loaded(current_src));
        self.take_listeners(image, LoadOutcome::Loaded)
    }

    /// Mark an image failed (complete, no resolved source) and take its
    /// listeners.
    pub fn fail_load(&mut self, image: StableId) -> Vec<LoadEvent> {
        self.images.insert(
            image,
            ImageState {
                complete: true,
                current_src: None,
            },
        );
        self.take_listeners(image, LoadOutcome::Failed)
    }

    fn take_listeners(&mut self, image: StableId, outcome: LoadOutcome) -> Vec<LoadEvent> {
        let mut handles: Vec<ListenerHandle> = self
            .listeners
            .iter()
            .filter(|(_, target)| **target == image)
            .map(|(handle, _)| *handle)
            .collect();
        // registration order
        handles.sort_unstable();

        handles
            .into_iter()
            .map(|handle| {
                self.listeners.remove(&handle);
                LoadEvent {
                    handle,
                    image,
                    outcome,
                }
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listeners
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a one-shot load listener on `image`
    pub fn add_load_listener(&mut self, image: StableId) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.insert(handle, image);
        handle
    }

    /// Remove a listener by handle. Returns whether it was still registered.
    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(&handle).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the element `id` (re-processing a subtree), reindex, and
    /// forget load state of images that no longer exist. Returns the old
    /// element.
    pub fn replace_element(&mut self, id: StableId, replacement: Element) -> Option<Element> {
        let slot = self.doc.get_mut(id)?;
        let old = std::mem::replace(slot, replacement);
        self.doc.reindex();

        let doc = &self.doc;
        self.images.retain(|image, _| doc.get(*image).is_some());
        Some(old)
    }
}

impl From<Document> for Page {
    fn from(doc: Document) -> Self {
        Self::new(doc)
    }
}
