//! Command implementations for ctxconf-cli

pub mod collection;
pub mod path;
pub mod resolve;
pub mod roots;

pub use collection::run_collection;
pub use path::{run_collection_path, run_path};
pub use resolve::run_resolve;
pub use roots::run_roots;

use crate::error::{CliError, Result};
use ctxconf_core::{ConfigurationResolver, PropertyContextChain, ResolverConfig};
use ctxconf_tree::{ConfPath, MemoryTree, TreeStore};
use std::path::Path;
use std::sync::Arc;

/// Where the resolver reads its tree and settings from.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub tree: &'a Path,
    pub settings: Option<&'a Path>,
    pub ref_property: &'a str,
}

impl Source<'_> {
    /// Load the tree and settings and build a resolver over them.
    pub fn resolver(&self) -> Result<ConfigurationResolver> {
        let store: Arc<dyn TreeStore> = Arc::new(MemoryTree::load(self.tree)?);
        let context = PropertyContextChain::new(Arc::clone(&store)).with_property(self.ref_property);
        let config = match self.settings {
            Some(path) => ResolverConfig::load(path)?,
            None => ResolverConfig::default(),
        };
        Ok(ConfigurationResolver::new(store, Arc::new(context)).with_config(config))
    }
}

/// Parse a content path argument, which must be absolute.
pub fn content_path(raw: &str) -> Result<ConfPath> {
    ConfPath::normalize(raw)
        .filter(ConfPath::is_absolute)
        .ok_or_else(|| CliError::user(format!("Content path must be absolute: '{raw}'")))
}
