//! In-memory trees and context chains for the common lookup scenarios.
//!
//! All scenarios share one layout: the content item `/content/a/page`
//! inherits the absolute reference `/conf/a` from `/content/a`, and the
//! only fallback root is `/conf/global`. The candidate roots are therefore
//! `/conf/a`, `/conf` and `/conf/global`.

use ctxconf_core::{ConfigurationResolver, ContextItem, ResolverConfig};
use ctxconf_tree::{ConfPath, MemoryTree, PropertyValue};
use std::sync::Arc;

/// Content item every scenario resolves for.
pub const CONTENT: &str = "/content/a/page";

/// Bucket every scenario stores its configuration in.
pub const BUCKET: &str = "settings";

/// Settings with `/conf/global` as the single fallback root.
pub fn scenario_config() -> ResolverConfig {
    ResolverConfig {
        fallback_roots: vec![ConfPath::new("/conf/global")],
        ..ResolverConfig::default()
    }
}

/// Context chain of [`CONTENT`], nearest first.
pub fn scenario_chain() -> Vec<ContextItem> {
    vec![
        ContextItem::new(CONTENT),
        ContextItem::with_ref("/content/a", "/conf/a"),
        ContextItem::new("/content"),
        ContextItem::new("/"),
    ]
}

/// `title` at `/conf/a` (`text = "A"`) and at `/conf/global`
/// (`text = "G"`, `color = "red"`), with the given property inheritance
/// flag on the specific node.
pub fn title_tree(property_inherit: bool) -> MemoryTree {
    MemoryTree::new()
        .with_node(
            "/conf/a/settings/title",
            [
                ("text", PropertyValue::from("A")),
                ("sling:configPropertyInherit", property_inherit.into()),
            ],
        )
        .with_node(
            "/conf/global/settings/title",
            [("text", "G"), ("color", "red")],
        )
}

/// `list` at `/conf/a` with children `x` and `y`, and at `/conf/global`
/// with children `y` and `z`, with the given inheritance flags on the
/// specific collection node.
pub fn list_tree(collection_inherit: bool, property_inherit: bool) -> MemoryTree {
    MemoryTree::new()
        .with_node(
            "/conf/a/settings/list",
            [
                ("sling:configCollectionInherit", collection_inherit),
                ("sling:configPropertyInherit", property_inherit),
            ],
        )
        .with_node("/conf/a/settings/list/x", [("level", "a")])
        .with_node("/conf/a/settings/list/y", [("level", "a")])
        .with_node("/conf/global/settings/list/y", [("level", "global"), ("extra", "global")])
        .with_node("/conf/global/settings/list/z", [("level", "global")])
}

/// Resolver over `tree` using [`scenario_chain`] and [`scenario_config`].
pub fn scenario_resolver(tree: MemoryTree) -> ConfigurationResolver {
    ConfigurationResolver::new(Arc::new(tree), Arc::new(scenario_chain())).with_config(scenario_config())
}

/// [`CONTENT`] as a path.
pub fn content() -> ConfPath {
    ConfPath::new(CONTENT)
}
