//! Reserved node and property names understood by the resolver.

/// Names with a fixed meaning inside the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedName {
    /// The content-marker child, never part of a configuration collection
    ContentNode,
    /// Property holding a context item's configuration reference
    ConfigRef,
    /// Boolean property enabling property inheritance on a configuration node
    PropertyInherit,
    /// Boolean property enabling collection inheritance on a collection parent
    CollectionInherit,
}

impl ReservedName {
    /// Get the string representation of the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentNode => "jcr:content",
            Self::ConfigRef => "sling:configRef",
            Self::PropertyInherit => "sling:configPropertyInherit",
            Self::CollectionInherit => "sling:configCollectionInherit",
        }
    }
}

impl AsRef<str> for ReservedName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ReservedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
