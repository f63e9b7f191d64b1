//! Text attributes recognized in style bodies.

use std::collections::HashMap;

/// A recognized attribute and the SGR code it emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub code: u8,
}

/// Mapping from attribute name to SGR code.
///
/// Lookups are case-sensitive. The default registry knows only `bold`;
/// further attributes are added with [`AttributeRegistry::register`].
///
/// ```
/// use markup::AttributeRegistry;
///
/// let mut registry = AttributeRegistry::default();
/// assert_eq!(registry.code("bold"), Some(1));
/// assert_eq!(registry.code("underline"), None);
///
/// registry.register("underline", 4);
/// assert_eq!(registry.code("underline"), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeRegistry {
    codes: HashMap<String, u8>,
}

impl AttributeRegistry {
    /// A registry that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Add or replace an attribute.
    pub fn register(&mut self, name: impl Into<String>, code: u8) {
        self.codes.insert(name.into(), code);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, code: u8) -> Self {
        self.register(name, code);
        self
    }

    pub fn code(&self, name: &str) -> Option<u8> {
        self.codes.get(name).copied()
    }

    /// Resolve a name to an [`Attribute`], or `None` if unknown.
    pub fn lookup(&self, name: &str) -> Option<Attribute> {
        self.code(name).map(|code| Attribute {
            name: name.to_string(),
            code,
        })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::empty().with("bold", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_knows_bold_only() {
        let registry = AttributeRegistry::default();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup("bold"),
            Some(Attribute {
                name: "bold".into(),
                code: 1
            })
        );
        assert_eq!(registry.lookup("italic"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = AttributeRegistry::default();
        assert_eq!(registry.code("Bold"), None);
        assert_eq!(registry.code("BOLD"), None);
    }

    #[test]
    fn register_replaces_existing_code() {
        let registry = AttributeRegistry::default().with("bold", 2);
        assert_eq!(registry.code("bold"), Some(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_registry() {
        assert!(AttributeRegistry::empty().is_empty());
    }
}
