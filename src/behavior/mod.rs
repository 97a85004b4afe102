//! Client-side behaviors, modeled over a [`Page`].
//!
//! A behavior attaches to a context element when that subtree is added or
//! re-processed, detaches before it is removed, and receives the load
//! events of listeners it registered. Listener registration goes through
//! explicit [`ListenerHandle`]s kept by the behavior; removal is by handle,
//! never by event name.
//!
//! - `DerivativeLinks` - points lightbox links at WebP derivatives when the
//!   browser picked a WebP thumbnail

mod links;
mod page;

pub use links::{AttachReport, DerivativeLinks, DetachReport, PairState, SkipReason};
pub use page::{ImageState, ListenerHandle, LoadEvent, LoadOutcome, Page};

use crate::id::StableId;

/// A DOM behavior with an attach/detach lifecycle.
pub trait Behavior {
    /// Identifier, for logs
    fn name(&self) -> &'static str;

    /// Process the subtree below `context`.
    fn attach(&mut self, page: &mut Page, context: StableId);

    /// Undo everything `attach` did below `context`.
    fn detach(&mut self, page: &mut Page, context: StableId);

    /// A listener this behavior may have registered fired.
    ///
    /// Events for handles the behavior does not own must be ignored.
    fn handle_event(&mut self, page: &mut Page, event: &LoadEvent);
}

/// Deliver fired load events to a behavior, in order.
pub fn dispatch<B: Behavior + ?Sized>(behavior: &mut B, page: &mut Page, events: &[LoadEvent]) {
    for event in events {
        behavior.handle_event(page, event);
    }
}

impl Page {
    /// Finish loading `image` with the browser-chosen `current_src` and
    /// deliver the fired listeners to `behavior`.
    pub fn load_image<B: Behavior + ?Sized>(
        &mut self,
        image: StableId,
        current_src: &str,
        behavior: &mut B,
    ) {
        let events = self.finish_load(image, current_src);
        dispatch(behavior, self, &events);
    }
}
