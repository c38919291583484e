//! Configuration lookups over an ordered sequence of candidate roots
//!
//! Both lookups probe `<root>/<bucket>/<config name>` at each candidate root,
//! most specific first, and keep going only while the last matched node asks
//! for inheritance:
//!
//! - property inheritance (`sling:configPropertyInherit`) fills keys missing
//!   from a more specific node with values from a less specific one
//! - collection inheritance (`sling:configCollectionInherit`) adds children
//!   of a less specific collection that the more specific one lacks

mod collection;
mod single;

use crate::decider::DeciderChain;
use crate::settings::ResolverConfig;
use ctxconf_tree::{ConfPath, Node, PropertyMap, PropertyValue, ReservedName, TreeStore};
use indexmap::IndexMap;

/// A resolved configuration node.
///
/// When inheritance merged properties from less specific nodes, the node
/// itself is still the most specific match and only the property view
/// differs from what the store holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode {
    node: Node,
    merged: Option<PropertyMap>,
}

impl ResolvedNode {
    pub(crate) fn native(node: Node) -> Self {
        Self { node, merged: None }
    }

    pub(crate) fn with_merged(node: Node, properties: PropertyMap) -> Self {
        Self {
            node,
            merged: Some(properties),
        }
    }

    /// The stored node this result stands for.
    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn path(&self) -> &ConfPath {
        self.node.path()
    }

    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// Effective properties: the merged view, or the node's own.
    pub fn properties(&self) -> &PropertyMap {
        self.merged.as_ref().unwrap_or_else(|| self.node.properties())
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties().get(key)
    }

    /// Whether inherited values were merged into the view.
    pub fn is_merged(&self) -> bool {
        self.merged.is_some()
    }

    pub fn into_node(self) -> Node {
        self.node
    }
}

/// Resolved collection children keyed by name, most specific first.
pub type ResolvedCollection = IndexMap<String, ResolvedNode>;

/// Lookup state shared by single and collection resolution for one call.
#[derive(Clone, Copy)]
pub struct Lookup<'a> {
    store: &'a dyn TreeStore,
    config: &'a ResolverConfig,
    deciders: &'a DeciderChain,
}

impl<'a> Lookup<'a> {
    pub fn new(store: &'a dyn TreeStore, config: &'a ResolverConfig, deciders: &'a DeciderChain) -> Self {
        Self {
            store,
            config,
            deciders,
        }
    }

    /// Probe `<root>/<name>` in the store.
    fn probe(&self, root: &ConfPath, name: &str) -> Option<Node> {
        let path = ConfPath::normalize(&format!("{root}/{name}"))?;
        self.store.node(&path)
    }

    fn property_inheritance(&self, properties: &PropertyMap) -> bool {
        inheritance_flag(
            properties,
            ReservedName::PropertyInherit,
            &self.config.property_inheritance_property_aliases,
        )
    }

    fn collection_inheritance(&self, properties: &PropertyMap) -> bool {
        inheritance_flag(
            properties,
            ReservedName::CollectionInherit,
            &self.config.collection_inheritance_property_aliases,
        )
    }
}

/// Read an inheritance flag: the primary key first, then each alias in
/// order. The first key holding a boolean wins; absent everywhere is false.
pub fn inheritance_flag(properties: &PropertyMap, key: ReservedName, aliases: &[String]) -> bool {
    std::iter::once(key.as_str())
        .chain(aliases.iter().map(String::as_str))
        .find_map(|name| properties.get(name).and_then(PropertyValue::as_bool))
        .unwrap_or(false)
}

/// Fill keys missing from `specific` with values from `inherited`.
///
/// Values already in `specific` always win.
pub fn merge_inherited(specific: &PropertyMap, inherited: &PropertyMap) -> PropertyMap {
    let mut merged = specific.clone();
    for (key, value) in inherited {
        merged
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, PropertyValue)]) -> PropertyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn flag_defaults_to_false() {
        assert!(!inheritance_flag(&PropertyMap::new(), ReservedName::PropertyInherit, &[]));
    }

    #[test]
    fn flag_primary_key_wins_over_alias() {
        let properties = props(&[
            ("sling:configPropertyInherit", false.into()),
            ("inherit", true.into()),
        ]);
        assert!(!inheritance_flag(
            &properties,
            ReservedName::PropertyInherit,
            &["inherit".to_string()]
        ));
    }

    #[test]
    fn flag_aliases_are_tried_in_order() {
        let properties = props(&[("second", false.into()), ("first", true.into())]);
        let aliases = ["missing".to_string(), "first".to_string(), "second".to_string()];
        assert!(inheritance_flag(&properties, ReservedName::PropertyInherit, &aliases));
    }

    #[test]
    fn flag_ignores_non_boolean_values() {
        let properties = props(&[("sling:configCollectionInherit", "maybe".into()), ("alias", "true".into())]);
        assert!(inheritance_flag(
            &properties,
            ReservedName::CollectionInherit,
            &["alias".to_string()]
        ));
    }

    #[test]
    fn merge_keeps_specific_values() {
        let specific = props(&[("text", "A".into())]);
        let inherited = props(&[("text", "G".into()), ("color", "red".into())]);

        let merged = merge_inherited(&specific, &inherited);

        assert_eq!(merged, props(&[("text", "A".into()), ("color", "red".into())]));
    }
}
