//! Synchronous document processing pipeline.

use crate::node::Document;

use super::{IdentityTransform, Transform};

// =============================================================================
// Pipeline
// =============================================================================

/// Synchronous pipeline for document processing.
///
/// Wraps a `Document` and provides a fluent API for transforms and data
/// collection.
///
/// # Example
///
/// ```
/// use media_vdom::config::MediaConfig;
/// use media_vdom::group::MediaGroupTransform;
/// use media_vdom::node::{Document, Element};
/// use media_vdom::poster::VideoPosterTransform;
/// use media_vdom::transform::Pipeline;
///
/// let config = MediaConfig::default();
/// let doc = Document::new(Element::new("main").child(Element::new("video")));
/// let doc = Pipeline::new(doc)
///     .pipe(MediaGroupTransform::new(&config))
///     .pipe(VideoPosterTransform::new("https://x/poster.jpg"))
///     .into_inner();
/// assert!(doc.has_element(|e| e.get_attr("poster").is_some()));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    doc: Document,
}

impl Pipeline {
    /// Create a new pipeline from a document.
    #[inline]
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    /// Apply a transform to the document.
    pub fn pipe<T: Transform>(self, transform: T) -> Self {
        tracing::trace!(transform = transform.name(), "applying transform");
        Self {
            doc: transform.transform(self.doc),
        }
    }

    /// Conditionally apply a transform.
    ///
    /// Only applies the transform if `condition` is true.
    #[inline]
    pub fn pipe_if<T: Transform>(self, condition: bool, transform: T) -> Self {
        if condition {
            self.pipe(transform)
        } else {
            self.pipe(IdentityTransform)
        }
    }

    /// Inspect the document without consuming the pipeline.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&Document),
    {
        f(&self.doc);
        self
    }

    /// Tap into the pipeline to extract data while continuing the chain.
    #[inline]
    pub fn tap<F, R>(self, f: F) -> (Self, R)
    where
        F: FnOnce(&Document) -> R,
    {
        let result = f(&self.doc);
        (self, result)
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Consume the pipeline and return the document.
    #[inline]
    pub fn into_inner(self) -> Document {
        self.doc
    }
}

impl From<Document> for Pipeline {
    #[inline]
    fn from(doc: Document) -> Self {
        Self::new(doc)
    }
}

impl From<Pipeline> for Document {
    #[inline]
    fn from(pipeline: Pipeline) -> Self {
        pipeline.into_inner()
    }
}
