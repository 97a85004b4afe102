//! Core transform trait.

use crate::node::Document;

/// An in-place document rewrite, applied once at build time.
pub trait Transform: Sized {
    /// Name used in logs
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Transform the document.
    fn transform(self, doc: Document) -> Document;
}

// =============================================================================
// IdentityTransform
// =============================================================================

/// Identity transform that returns the document unchanged.
///
/// Useful for conditional transforms where one branch doesn't need to modify
/// the document.
///
/// # Example
///
/// ```
/// use media_vdom::node::{Document, Element};
/// use media_vdom::transform::{IdentityTransform, Pipeline};
///
/// let doc = Document::new(Element::new("main"));
/// let out = Pipeline::new(doc.clone()).pipe(IdentityTransform).into_inner();
/// assert_eq!(out, doc);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    fn name(&self) -> &'static str {
        "identity"
    }

    #[inline]
    fn transform(self, doc: Document) -> Document {
        doc
    }
}

/// Any `FnOnce(Document) -> Document` is a transform.
impl<F> Transform for F
where
    F: FnOnce(Document) -> Document,
{
    fn name(&self) -> &'static str {
        "closure"
    }

    fn transform(self, doc: Document) -> Document {
        self(doc)
    }
}
