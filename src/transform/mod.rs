//! Build-time document transforms.
//!
//! - `Transform` - in-place document rewrite
//! - `Pipeline` - applies transforms in sequence
//!
//! The media transforms themselves live next to their domain code:
//! [`MediaGroupTransform`](crate::group::MediaGroupTransform) and
//! [`VideoPosterTransform`](crate::poster::VideoPosterTransform).

mod core;
mod pipeline;

pub use core::{IdentityTransform, Transform};
pub use pipeline::Pipeline;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Document, Element};

    fn doc() -> Document {
        Document::new(Element::new("main").child(Element::new("p").text("hi")))
    }

    fn mark(mut doc: Document) -> Document {
        doc.root.set_attr("data-marked", "1");
        doc
    }

    #[test]
    fn test_identity() {
        let before = doc();
        let after = Pipeline::new(before.clone()).pipe(IdentityTransform).into_inner();
        assert_eq!(before, after);
    }

    #[test]
    fn test_pipe_if() {
        let skipped = Pipeline::new(doc()).pipe_if(false, mark).into_inner();
        assert!(!skipped.root.has_attr("data-marked"));

        let applied = Pipeline::new(doc()).pipe_if(true, mark).into_inner();
        assert_eq!(applied.root.get_attr("data-marked"), Some("1"));
    }

    #[test]
    fn test_inspect_and_tap() {
        let mut seen = 0;
        let (pipeline, count) = Pipeline::new(doc())
            .inspect(|d| seen = d.element_count())
            .tap(|d| d.element_count());
        assert_eq!(seen, 2);
        assert_eq!(count, 2);

        let doc: Document = pipeline.into();
        assert_eq!(doc.element_count(), 2);
    }

    #[test]
    fn test_attribute_edit_keeps_ids() {
        let before = doc();
        let after = Pipeline::new(before.clone()).pipe(mark).into_inner();
        assert_eq!(before.root.id, after.root.id);
    }
}
