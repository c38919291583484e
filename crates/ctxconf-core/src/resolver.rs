//! Context-aware configuration resolver
//!
//! The [`ConfigurationResolver`] ties the collaborators together: a
//! [`TreeStore`] to probe, a [`ContextChainProvider`] to discover references,
//! the registered deciders and the current settings. Each call captures the
//! settings and decider snapshots once at entry and never retains state
//! after returning.

use crate::context::{ContextChainProvider, ContextItem, PropertyContextChain};
use crate::decider::{DeciderChain, InclusionDecider};
use crate::lookup::{Lookup, ResolvedCollection, ResolvedNode};
use crate::resolve::{ReferenceChain, ReferenceValidator, candidate_roots, is_valid_name};
use crate::settings::{ResolverConfig, Snapshot};
use ctxconf_tree::{ConfPath, TreeStore};
use std::sync::Arc;

/// Resolves configuration nodes for content items.
///
/// # Example
///
/// ```
/// use ctxconf_core::ConfigurationResolver;
/// use ctxconf_tree::{ConfPath, MemoryTree};
/// use std::sync::Arc;
///
/// let tree = MemoryTree::new()
///     .with_node("/content/site", [("sling:configRef", "/conf/site")])
///     .with_node("/conf/site/settings/title", [("text", "Site")]);
/// let resolver = ConfigurationResolver::with_property_chain(Arc::new(tree));
///
/// let title = resolver
///     .resolve_single(&ConfPath::new("/content/site/page"), "settings", "title")
///     .unwrap();
/// assert_eq!(title.path().as_str(), "/conf/site/settings/title");
/// ```
pub struct ConfigurationResolver {
    store: Arc<dyn TreeStore>,
    context: Arc<dyn ContextChainProvider>,
    config: Snapshot<ResolverConfig>,
    deciders: Snapshot<DeciderChain>,
}

impl ConfigurationResolver {
    /// Create a resolver with default settings and no deciders.
    pub fn new(store: Arc<dyn TreeStore>, context: Arc<dyn ContextChainProvider>) -> Self {
        Self {
            store,
            context,
            config: Snapshot::new(ResolverConfig::default()),
            deciders: Snapshot::new(DeciderChain::new()),
        }
    }

    /// Create a resolver discovering references through `sling:configRef`
    /// properties in the same store.
    pub fn with_property_chain(store: Arc<dyn TreeStore>) -> Self {
        let context = Arc::new(PropertyContextChain::new(Arc::clone(&store)));
        Self::new(store, context)
    }

    /// Builder-style [`ConfigurationResolver::set_config`].
    pub fn with_config(self, config: ResolverConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Builder-style [`ConfigurationResolver::set_deciders`].
    pub fn with_deciders(self, deciders: DeciderChain) -> Self {
        self.set_deciders(deciders);
        self
    }

    /// The settings the next call will use.
    pub fn config(&self) -> Arc<ResolverConfig> {
        self.config.load()
    }

    /// Replace the settings for all subsequent calls.
    pub fn set_config(&self, config: ResolverConfig) {
        tracing::debug!(?config, "Replacing resolver settings");
        self.config.replace(config);
    }

    /// Replace the registered deciders for all subsequent calls.
    pub fn set_deciders(&self, deciders: DeciderChain) {
        tracing::debug!(count = deciders.len(), "Replacing collection inheritance deciders");
        self.deciders.replace(deciders);
    }

    /// Register one more decider; it is consulted before all earlier ones.
    pub fn register_decider(&self, decider: Arc<dyn InclusionDecider>) {
        self.deciders.update(|current| {
            let mut deciders = current.clone();
            deciders.register(Arc::clone(&decider));
            deciders
        });
    }

    /// Resolve a single configuration node.
    pub fn resolve_single(&self, content: &ConfPath, bucket_name: &str, config_name: &str) -> Option<ResolvedNode> {
        let config = self.config.load();
        if !accepts(&config, content, bucket_name, config_name) {
            return None;
        }
        tracing::debug!(name = %format!("{bucket_name}/{config_name}"), content = %content, "Searching config item");

        let deciders = self.deciders.load();
        let suffix = format!("/{bucket_name}");
        let roots = candidate_roots(&config, self.references(&config, content, &suffix));
        Lookup::new(self.store.as_ref(), &config, &deciders).resolve_single(roots, bucket_name, config_name)
    }

    /// Resolve a configuration collection; empty when nothing is found.
    pub fn resolve_collection(&self, content: &ConfPath, bucket_name: &str, config_name: &str) -> ResolvedCollection {
        let config = self.config.load();
        if !accepts(&config, content, bucket_name, config_name) {
            return ResolvedCollection::new();
        }

        let deciders = self.deciders.load();
        let suffix = format!("/{bucket_name}");
        let roots = candidate_roots(&config, self.references(&config, content, &suffix));
        Lookup::new(self.store.as_ref(), &config, &deciders).resolve_collection(roots, bucket_name, config_name)
    }

    /// Path where the configuration node for `content` belongs, whether or
    /// not it exists.
    pub fn resolve_config_path(&self, content: &ConfPath, bucket_name: &str, config_name: &str) -> Option<ConfPath> {
        let path = self.first_reference_path(content, bucket_name, config_name);
        match &path {
            Some(path) => tracing::debug!(content = %content, path = %path, "Building configuration path"),
            None => tracing::debug!(content = %content, bucket_name, config_name, "No configuration path found"),
        }
        path
    }

    /// Path where the configuration collection parent for `content`
    /// belongs, whether or not it exists.
    pub fn resolve_collection_parent_path(
        &self,
        content: &ConfPath,
        bucket_name: &str,
        config_name: &str,
    ) -> Option<ConfPath> {
        let path = self.first_reference_path(content, bucket_name, config_name);
        match &path {
            Some(path) => tracing::debug!(content = %content, path = %path, "Building configuration collection parent path"),
            None => tracing::debug!(content = %content, bucket_name, config_name, "No configuration collection parent path found"),
        }
        path
    }

    /// The candidate roots a lookup for `content` in `bucket_name` would
    /// search, in order.
    pub fn candidate_roots(&self, content: &ConfPath, bucket_name: &str) -> Vec<ConfPath> {
        let config = self.config.load();
        if !config.enabled || !content.is_absolute() || !is_valid_name(bucket_name) {
            return Vec::new();
        }
        let suffix = format!("/{bucket_name}");
        candidate_roots(&config, self.references(&config, content, &suffix)).collect()
    }

    fn first_reference_path(&self, content: &ConfPath, bucket_name: &str, config_name: &str) -> Option<ConfPath> {
        let config = self.config.load();
        if !accepts(&config, content, bucket_name, config_name) {
            return None;
        }
        let suffix = format!("/{bucket_name}");
        let reference = self.references(&config, content, &suffix).next()?;
        ConfPath::normalize(&format!("{reference}/{bucket_name}/{config_name}"))
    }

    fn references<'a>(
        &'a self,
        config: &'a ResolverConfig,
        content: &ConfPath,
        bucket_suffix: &'a str,
    ) -> ReferenceChain<'a, Box<dyn Iterator<Item = ContextItem> + 'a>> {
        let items = self.context.context_items(content);
        ReferenceChain::new(items, ReferenceValidator::new(config, bucket_suffix))
    }
}

fn accepts(config: &ResolverConfig, content: &ConfPath, bucket_name: &str, config_name: &str) -> bool {
    let accepted = config.enabled && content.is_absolute() && is_valid_name(bucket_name) && is_valid_name(config_name);
    if !accepted {
        tracing::debug!(
            enabled = config.enabled,
            content = %content,
            bucket_name,
            config_name,
            "Lookup skipped - resolver disabled or invalid arguments"
        );
    }
    accepted
}
