//! Attribute system for VDOM elements
//!
//! - Direct `Vec<(String, String)>` for attributes, in document order
//! - `class` token helpers
//! - inline `style` declaration parsing and serialization

/// Element attributes as simple key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;

    /// Check whether the `class` attribute contains `class` as a token
    fn has_class(&self, class: &str) -> bool;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }

    fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }
}

// =============================================================================
// Inline style
// =============================================================================

/// Parsed inline `style` declarations, in source order.
///
/// Property names are kept as written; a later declaration of the same
/// property replaces the earlier one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDecls(Vec<(String, String)>);

impl StyleDecls {
    /// Parse a `style` attribute value.
    ///
    /// Declarations without a `:` or with an empty property are dropped.
    pub fn parse(style: &str) -> Self {
        let mut decls = Self::default();
        for decl in style.split(';') {
            let Some((prop, value)) = decl.split_once(':') else {
                continue;
            };
            let prop = prop.trim();
            if prop.is_empty() {
                continue;
            }
            decls.set(prop, value.trim());
        }
        decls
    }

    /// Get a declaration's value
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration (update in place if present)
    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<String>) {
        let prop = prop.into();
        let value = value.into();
        if let Some(decl) = self.0.iter_mut().find(|(k, _)| k == &prop) {
            decl.1 = value;
        } else {
            self.0.push((prop, value));
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize back to a `style` attribute value: `a: 1; b: 2;`
    pub fn serialize(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// Tests
// =============================================================================
