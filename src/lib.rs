//! media-vdom - media embedding for wiki articles over a small virtual DOM
//!
//! ## Core Concepts
//!
//! **Derivative links**: a media embed wraps a thumbnail `<img srcset>` in a
//! lightbox anchor pointing at the full-size image. When the browser picks a
//! WebP thumbnail, the lightbox should open the WebP derivative of the full
//! image as well. [`behavior::DerivativeLinks`] does that rewrite, and
//! restores the original target on detach.
//!
//! **Stable identity**: elements get a content-derived [`StableId`] so
//! behaviors can keep per-element state in side tables instead of on the
//! nodes themselves.
//!
//! ## Modules
//! - `srcset`: `srcset` attribute parsing
//! - `webp`: WebP derivative URLs
//! - `behavior`: page model and the derivative-link behavior
//! - `node`: Node/Element/Text/Document types
//! - `transform`: build-time document transforms and `Pipeline`
//! - `group`, `embed`, `poster`: media groups, `<media>` options, video posters
//! - `config`: TOML configuration
//!
//! ## Usage
//!
//! ```
//! use media_vdom::behavior::{Behavior, DerivativeLinks, Page};
//! use media_vdom::node::{Document, Element};
//!
//! let figure = Element::new("div").with_class("omnipedia-media").child(
//!     Element::new("a")
//!         .attr("data-photoswipe-src", "https://x/files/full.jpg")
//!         .child(Element::new("img").attr("srcset", "https://x/t.webp 1x, https://x/t.jpg 1x")),
//! );
//! let mut page = Page::new(Document::new(Element::new("main").child(figure)));
//! let root = page.document().root.id;
//! let img = page.find_id(|e| e.tag == "img").unwrap();
//!
//! let mut links = DerivativeLinks::default();
//! links.attach(&mut page, root);
//! page.load_image(img, "https://x/t.webp", &mut links);
//!
//! let anchor = page.document().find_element(|e| e.tag == "a").unwrap();
//! assert_eq!(anchor.get_attr("data-photoswipe-src"), Some("https://x/files/full.webp"));
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// `srcset` parsing
pub mod srcset;

/// WebP derivative URLs
pub mod webp;

/// Client-side behaviors and the page model
pub mod behavior;

/// Node types: Document, Element, Node, Text
pub mod node;

/// Build-time transforms: Transform, Pipeline
pub mod transform;

/// Attribute and inline style helpers
pub mod attr;

/// Stable identity for elements
pub mod id;

/// blake3 hashing
pub mod hash;

/// Element classification
pub mod family;

pub mod group;
pub mod embed;
pub mod poster;

pub mod config;

/// Error types
pub mod error;

/// HTML rendering
pub mod render;

/// Prelude for common imports
pub mod prelude;

#[cfg(feature = "logging")]
pub mod logging;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Document, Element, Node, Text, TextKind};

// Identity
pub use id::StableId;

// Config
pub use config::MediaConfig;

// Error types
pub use error::{MediaError, MediaResult};
