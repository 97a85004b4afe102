//! Content-based stable element identity
//!
//! Every element in a [`Document`](crate::node::Document) carries a
//! [`StableId`] computed from:
//! - the parent's id (seed)
//! - the tag name
//! - key attributes only (`id`, `key`, `data-key*`)
//! - the occurrence index among same-keyed siblings
//!
//! Regular attributes are not hashed, so rewriting `data-photoswipe-src` or
//! `style` keeps the element's identity. Side tables (lightbox backups,
//! pending load listeners, image load state) are keyed by this id rather
//! than by attaching data to the element itself.
//!
//! Re-indexing the same subtree yields the same ids, which is what makes
//! re-attaching a behavior to a re-processed subtree idempotent.

use std::fmt;

use crate::hash::StableHasher;

// =============================================================================
// StableId
// =============================================================================

/// Stable element identifier based on content hash
///
/// 8 bytes, `Copy`, no heap allocation. The default value (0) marks an
/// element that has not been indexed yet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[must_use]
pub struct StableId(pub(crate) u64);

impl StableId {
    /// Create a StableId from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Whether this id was assigned by indexing
    #[inline]
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// Lowercase hex representation, no prefix
    #[inline]
    pub fn to_attr_value(self) -> String {
        format!("{:x}", self.as_raw())
    }

    /// Create a StableId for an element node
    ///
    /// * `tag` - Element tag name
    /// * `attrs` - All attributes (only key attrs are hashed)
    /// * `occurrence` - How many same-(tag, key attrs) siblings appeared before
    /// * `parent_seed` - Raw id of the parent element (0 for the root)
    pub fn for_element<K: AsRef<str>, V: AsRef<str>>(
        tag: &str,
        attrs: &[(K, V)],
        occurrence: usize,
        parent_seed: u64,
    ) -> Self {
        let mut hasher = StableHasher::new()
            .update_u64(parent_seed)
            .update_str(tag);

        for (k, v) in attrs {
            let k = k.as_ref();
            if is_key_attr(k) {
                hasher = hasher.update_str(k).update_str(v.as_ref());
            }
        }

        let raw = hasher.update_usize(occurrence).finish();
        // 0 is reserved for "unassigned"
        Self(raw.max(1))
    }
}

/// Attributes that participate in element identity
pub fn is_key_attr(name: &str) -> bool {
    name == "id" || name == "key" || name.starts_with("data-key")
}

/// Identity key used to count sibling occurrences: tag plus key attributes.
pub(crate) fn occurrence_key<K: AsRef<str>, V: AsRef<str>>(tag: &str, attrs: &[(K, V)]) -> u64 {
    let mut hasher = StableHasher::new().update_str(tag);
    for (k, v) in attrs {
        let k = k.as_ref();
        if is_key_attr(k) {
            hasher = hasher.update_str(k).update_str(v.as_ref());
        }
    }
    hasher.finish()
}

impl fmt::Debug for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StableId({:016x})", self.0)
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
