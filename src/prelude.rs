//! Prelude module for common imports.
//!
//! ```
//! use media_vdom::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Document, Element, Node, Text, TextKind};

// Attributes
pub use crate::attr::{Attrs, AttrsExt, StyleDecls};

// Identity
pub use crate::id::StableId;

// srcset and WebP
pub use crate::srcset::{Descriptor, SrcSetEntry};
pub use crate::webp::{WebpError, image_url_to_webp, is_webp, path_to_webp};

// Behaviors
pub use crate::behavior::{Behavior, DerivativeLinks, ImageState, Page, PairState};

// Transforms
pub use crate::embed::{EmbedError, MediaEmbed, MediaItem, MediaLibrary};
pub use crate::group::MediaGroupTransform;
pub use crate::poster::VideoPosterTransform;
pub use crate::transform::{IdentityTransform, Pipeline, Transform};

// Config
pub use crate::config::{MediaConfig, StorageSettings};

// Error
pub use crate::error::{MediaError, MediaResult};

// Render
pub use crate::render::{RenderConfig, render_document};
