//! In-memory content tree

use crate::document::{DocumentLoader, TreeDocument, TreeEntry};
use crate::{ConfPath, Error, Node, PropertyMap, Result, TreeStore};
use indexmap::IndexMap;
use std::path::Path;

/// A content tree held entirely in memory.
///
/// Nodes are keyed by absolute path. Children are enumerated in the order
/// they were first inserted. Inserting a node creates any missing ancestors
/// with empty properties.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: IndexMap<ConfPath, Node>,
    children: IndexMap<ConfPath, Vec<ConfPath>>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    /// Create a tree holding only an empty root node.
    pub fn new() -> Self {
        let root = ConfPath::root();
        let mut nodes = IndexMap::new();
        nodes.insert(root.clone(), Node::new(root, PropertyMap::new()));
        Self {
            nodes,
            children: IndexMap::new(),
        }
    }

    /// Build a tree from a parsed document.
    pub fn from_document(document: &TreeDocument) -> Self {
        let mut tree = Self::new();
        tree.insert_entries(&ConfPath::root(), &document.entries);
        tracing::debug!(nodes = tree.len(), "Built content tree from document");
        tree
    }

    /// Load a tree document from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let document: TreeDocument = DocumentLoader::new().load(path)?;
        Ok(Self::from_document(&document))
    }

    /// Insert or replace the node at `path`.
    ///
    /// The path is normalized first; relative paths and paths climbing
    /// above the root are rejected.
    pub fn insert(&mut self, path: &str, properties: PropertyMap) -> Result<()> {
        let normalized = ConfPath::normalize(path)
            .filter(ConfPath::is_absolute)
            .ok_or_else(|| Error::invalid_path(path, "expected an absolute tree path"))?;
        self.put(normalized, properties);
        Ok(())
    }

    /// Builder-style [`MemoryTree::insert`] for fixtures.
    ///
    /// Invalid paths are logged and skipped.
    pub fn with_node<K, V>(mut self, path: &str, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<crate::PropertyValue>,
    {
        let properties = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if let Err(e) = self.insert(path, properties) {
            tracing::warn!(error = %e, "Skipping fixture node");
        }
        self
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn put(&mut self, path: ConfPath, properties: PropertyMap) {
        self.ensure_ancestors(&path);
        if !self.nodes.contains_key(&path) {
            if let Some(parent) = path.parent() {
                self.children.entry(parent).or_default().push(path.clone());
            }
        }
        self.nodes.insert(path.clone(), Node::new(path, properties));
    }

    fn ensure_ancestors(&mut self, path: &ConfPath) {
        let missing: Vec<ConfPath> = path
            .ancestors()
            .take_while(|p| !self.nodes.contains_key(p))
            .collect();
        for ancestor in missing.into_iter().rev() {
            if let Some(parent) = ancestor.parent() {
                self.children
                    .entry(parent)
                    .or_default()
                    .push(ancestor.clone());
            }
            self.nodes
                .insert(ancestor.clone(), Node::new(ancestor, PropertyMap::new()));
        }
    }

    fn insert_entries(&mut self, parent: &ConfPath, entries: &IndexMap<String, TreeEntry>) {
        let properties: PropertyMap = entries
            .iter()
            .filter_map(|(key, entry)| match entry {
                TreeEntry::Property(value) => Some((key.clone(), value.clone())),
                TreeEntry::Node(_) => None,
            })
            .collect();
        self.put(parent.clone(), properties);

        for (name, entry) in entries {
            if let TreeEntry::Node(child_entries) = entry {
                self.insert_entries(&parent.join(name), child_entries);
            }
        }
    }
}

impl TreeStore for MemoryTree {
    fn node(&self, path: &ConfPath) -> Option<Node> {
        self.nodes.get(path).cloned()
    }

    fn children(&self, path: &ConfPath) -> Vec<Node> {
        self.children
            .get(path)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(|p| self.nodes.get(p).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
