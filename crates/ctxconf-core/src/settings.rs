//! Resolver settings and atomically replaceable snapshots
//!
//! [`ResolverConfig`] is the recognized option set of the resolver. It is
//! read from TOML, JSON or YAML with camelCase keys; every key is optional:
//!
//! ```toml
//! enabled = true
//! configRootPath = "/conf"
//! fallbackRoots = ["/conf/global", "/apps/conf", "/libs/conf"]
//! collectionInheritancePropertyAliases = []
//! propertyInheritancePropertyAliases = ["mergeProperties"]
//! ```

use crate::{Error, Result};
use arc_swap::ArcSwap;
use ctxconf_tree::{ConfPath, DocumentLoader};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Default location of configuration nodes.
pub const DEFAULT_CONFIG_ROOT: &str = "/conf";

/// Default global fallbacks, most specific first.
pub const DEFAULT_FALLBACK_ROOTS: [&str; 3] = ["/conf/global", "/apps/conf", "/libs/conf"];

/// Immutable resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// When false every lookup reports "not found"
    pub enabled: bool,

    /// References must point below this path
    pub config_root_path: ConfPath,

    /// Global fallbacks, consulted after all discovered references
    pub fallback_roots: Vec<ConfPath>,

    /// Property names consulted after `sling:configCollectionInherit`, in order
    pub collection_inheritance_property_aliases: Vec<String>,

    /// Property names consulted after `sling:configPropertyInherit`, in order
    pub property_inheritance_property_aliases: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            config_root_path: ConfPath::new(DEFAULT_CONFIG_ROOT),
            fallback_roots: DEFAULT_FALLBACK_ROOTS.iter().map(ConfPath::new).collect(),
            collection_inheritance_property_aliases: Vec::new(),
            property_inheritance_property_aliases: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Load and validate settings from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        let config: Self = DocumentLoader::new().load(path)?;
        let config = config.normalized()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded resolver settings");
        Ok(config)
    }

    /// Parse and validate settings from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        let config = config.normalized()?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve `.` and `..` segments and trailing slashes in all configured
    /// paths.
    pub fn normalized(mut self) -> Result<Self> {
        self.config_root_path = normalize_setting("configRootPath", &self.config_root_path)?;
        self.fallback_roots = self
            .fallback_roots
            .iter()
            .map(|root| normalize_setting("fallbackRoots", root))
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Check that all configured paths are absolute and normalized.
    pub fn validate(&self) -> Result<()> {
        if !self.config_root_path.is_absolute() || self.config_root_path.is_root() {
            return Err(Error::invalid_settings(format!(
                "configRootPath must be an absolute path below '/', got '{}'",
                self.config_root_path
            )));
        }
        if let Some(relative) = self.fallback_roots.iter().find(|p| !p.is_absolute()) {
            return Err(Error::invalid_settings(format!(
                "fallbackRoots must be absolute, got '{relative}'"
            )));
        }
        let mut paths = std::iter::once(&self.config_root_path).chain(&self.fallback_roots);
        if let Some(raw) = paths.find(|p| ConfPath::normalize(p.as_str()).as_ref() != Some(*p)) {
            return Err(Error::invalid_settings(format!("path '{raw}' is not normalized")));
        }
        Ok(())
    }

    /// Whether `path` is nested under the configuration root.
    pub fn is_allowed(&self, path: &ConfPath) -> bool {
        path.is_descendant_of(&self.config_root_path)
    }

    /// Whether `path` equals or is nested under any fallback root.
    pub fn is_fallback(&self, path: &ConfPath) -> bool {
        self.fallback_roots.iter().any(|root| path.is_within(root))
    }
}

fn normalize_setting(key: &str, path: &ConfPath) -> Result<ConfPath> {
    ConfPath::normalize(path.as_str())
        .ok_or_else(|| Error::invalid_settings(format!("{key} contains an unresolvable path '{path}'")))
}

/// A shared value replaced atomically as a whole.
///
/// Readers take an `Arc` snapshot once and keep using it, so a concurrent
/// [`Snapshot::replace`] never exposes a half-updated value. Loads are
/// wait-free.
#[derive(Debug, Default)]
pub struct Snapshot<T> {
    current: ArcSwap<T>,
}

impl<T> Snapshot<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: ArcSwap::from_pointee(value),
        }
    }

    /// Capture the current value.
    pub fn load(&self) -> Arc<T> {
        self.current.load_full()
    }

    /// Replace the value for all subsequent [`Snapshot::load`] calls.
    pub fn replace(&self, value: T) {
        self.current.store(Arc::new(value));
    }

    /// Derive the next value from the current one.
    ///
    /// `update` may run more than once when writers race.
    pub fn update<F>(&self, update: F)
    where
        F: Fn(&T) -> T,
    {
        self.current.rcu(|current| update(current));
    }
}
