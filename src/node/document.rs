//! Document type and related utilities
//!
//! The root container for VDOM trees, with indexing, query, and traversal APIs.

use rustc_hash::FxHashMap;

use crate::id::{StableId, occurrence_key};

use super::Element;

// =============================================================================
// Document
// =============================================================================

/// Root document container
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Root element (typically <body> or a wrapper)
    pub root: Element,
    /// Seed mixed into every id, so two pages never share ids
    pub page_seed: u64,
}

impl Document {
    /// Create a document and assign ids to every element
    pub fn new(root: Element) -> Self {
        Self::with_page_seed(root, 0)
    }

    /// Create a document whose ids are seeded by the page path
    pub fn with_page_seed(root: Element, page_seed: u64) -> Self {
        let mut doc = Self { root, page_seed };
        doc.reindex();
        doc
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Indexing
    // ─────────────────────────────────────────────────────────────────────────

    /// (Re)assign a [`StableId`] to every element.
    ///
    /// Ids only depend on tag, key attributes, sibling occurrence, and the
    /// parent id, so calling this after attribute edits is a no-op for
    /// identity. Call it after inserting or replacing subtrees.
    pub fn reindex(&mut self) {
        let seed = self.page_seed;
        Self::index_element(&mut self.root, 0, seed);
    }

    fn index_element(elem: &mut Element, occurrence: usize, parent_seed: u64) {
        elem.id = StableId::for_element(&elem.tag, &elem.attrs, occurrence, parent_seed);
        let seed = elem.id.as_raw();

        let mut seen: FxHashMap<u64, usize> = FxHashMap::default();
        for child in elem.children_elements_mut() {
            let slot = seen
                .entry(occurrence_key(&child.tag, &child.attrs))
                .or_insert(0);
            let occurrence = *slot;
            *slot += 1;
            Self::index_element(child, occurrence, seed);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first search)
    pub fn find_element<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.iter_elements().find(|e| predicate(e))
    }

    /// Find all elements matching predicate
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.iter_elements().filter(|e| predicate(e)).collect()
    }

    /// Check if any element matches predicate
    pub fn has_element<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.find_element(predicate).is_some()
    }

    /// Look an element up by id
    pub fn get(&self, id: StableId) -> Option<&Element> {
        self.find_element(|e| e.id == id)
    }

    /// Look an element up by id (mutable)
    pub fn get_mut(&mut self, id: StableId) -> Option<&mut Element> {
        if self.root.id == id {
            return Some(&mut self.root);
        }
        self.root.find_descendant_mut(|e| e.id == id)
    }

    /// Count total elements in document
    pub fn element_count(&self) -> usize {
        self.iter_elements().count()
    }

    /// Iterate over all elements (depth-first, document order)
    pub fn iter_elements(&self) -> ElementIterator<'_> {
        ElementIterator::new(&self.root)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Closure-based traversal API
    // ─────────────────────────────────────────────────────────────────────────

    /// Visit all elements with a closure (mutable, pre-order)
    pub fn for_each_element_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        Self::visit_elements_mut_recursive(&mut self.root, &mut f);
    }

    fn visit_elements_mut_recursive<F>(elem: &mut Element, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        f(elem);
        for child in elem.children_elements_mut() {
            Self::visit_elements_mut_recursive(child, f);
        }
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first iterator over an element and its descendants
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIterator<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}
