//! Context items and the strategies that enumerate them
//!
//! A context item is an ancestor of the content item that may carry a
//! configuration reference. Providers yield them nearest first, ending at
//! the tree root.

use ctxconf_tree::{ConfPath, ReservedName, TreeStore};
use std::sync::Arc;

/// A node of the ancestor chain together with its raw configuration reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextItem {
    path: ConfPath,
    config_ref: Option<String>,
}

impl ContextItem {
    /// A context item without a reference.
    pub fn new(path: impl Into<ConfPath>) -> Self {
        Self {
            path: path.into(),
            config_ref: None,
        }
    }

    /// A context item carrying an absolute or relative reference.
    pub fn with_ref(path: impl Into<ConfPath>, config_ref: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            config_ref: Some(config_ref.into()),
        }
    }

    pub fn path(&self) -> &ConfPath {
        &self.path
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config_ref.as_deref()
    }
}

/// Strategy enumerating the context items of a content item.
pub trait ContextChainProvider: Send + Sync {
    /// Yield context items for `start`, nearest ancestor first.
    ///
    /// The sequence must be finite and end at the tree root.
    fn context_items<'a>(&'a self, start: &ConfPath) -> Box<dyn Iterator<Item = ContextItem> + 'a>;
}

/// Default strategy: every existing node from the content item up to the
/// root, with the reference read from its `sling:configRef` property.
pub struct PropertyContextChain {
    store: Arc<dyn TreeStore>,
    property: String,
}

impl PropertyContextChain {
    pub fn new(store: Arc<dyn TreeStore>) -> Self {
        Self {
            store,
            property: ReservedName::ConfigRef.as_str().to_string(),
        }
    }

    /// Read references from a different property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }
}

impl ContextChainProvider for PropertyContextChain {
    fn context_items<'a>(&'a self, start: &ConfPath) -> Box<dyn Iterator<Item = ContextItem> + 'a> {
        let lineage = std::iter::successors(Some(start.clone()), ConfPath::parent);
        Box::new(lineage.filter_map(move |path| {
            let node = self.store.node(&path)?;
            let config_ref = node
                .property(&self.property)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string);
            Some(ContextItem { path, config_ref })
        }))
    }
}

impl ContextChainProvider for Vec<ContextItem> {
    fn context_items<'a>(&'a self, _start: &ConfPath) -> Box<dyn Iterator<Item = ContextItem> + 'a> {
        Box::new(self.iter().cloned())
    }
}
