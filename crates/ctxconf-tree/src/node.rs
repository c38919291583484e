//! Tree nodes and the read-only store accessor

use crate::{ConfPath, PropertyMap, PropertyValue};
use std::sync::Arc;

/// A node of the content tree: its path and its native properties.
///
/// Cloning a node is cheap; clones share the same property map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    path: ConfPath,
    properties: Arc<PropertyMap>,
}

impl Node {
    pub fn new(path: ConfPath, properties: PropertyMap) -> Self {
        Self {
            path,
            properties: Arc::new(properties),
        }
    }

    pub fn path(&self) -> &ConfPath {
        &self.path
    }

    /// The last path segment.
    pub fn name(&self) -> &str {
        self.path.name()
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Whether `other` is the very same stored node, not merely an equal one.
    pub fn is_same(&self, other: &Node) -> bool {
        self.path == other.path && Arc::ptr_eq(&self.properties, &other.properties)
    }
}

/// Read-only path-based access to a content tree.
///
/// Implementations decide how read failures surface; the resolver treats
/// any missing node as absent.
pub trait TreeStore: Send + Sync {
    /// Look up the node at an absolute path.
    fn node(&self, path: &ConfPath) -> Option<Node>;

    /// Enumerate the children of the node at `path`, in store order.
    ///
    /// Returns an empty list when the node does not exist.
    fn children(&self, path: &ConfPath) -> Vec<Node>;
}

impl<T: TreeStore + ?Sized> TreeStore for Arc<T> {
    fn node(&self, path: &ConfPath) -> Option<Node> {
        (**self).node(path)
    }

    fn children(&self, path: &ConfPath) -> Vec<Node> {
        (**self).children(path)
    }
}

impl<T: TreeStore + ?Sized> TreeStore for &T {
    fn node(&self, path: &ConfPath) -> Option<Node> {
        (**self).node(path)
    }

    fn children(&self, path: &ConfPath) -> Vec<Node> {
        (**self).children(path)
    }
}
