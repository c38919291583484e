use super::{Lookup, ResolvedCollection, ResolvedNode, merge_inherited};
use crate::decider::InheritanceDecision;
use ctxconf_tree::{ConfPath, Node, PropertyMap, ReservedName};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

impl Lookup<'_> {
    /// Collect the children of `<root>/<bucket>/<config name>` among `roots`.
    ///
    /// The first existing collection supplies the initial entries. While the
    /// last scanned collection enables collection inheritance, children of
    /// less specific collections are appended; while it enables property
    /// inheritance, their properties fill gaps in entries already collected.
    pub fn resolve_collection<I>(&self, roots: I, bucket_name: &str, config_name: &str) -> ResolvedCollection
    where
        I: Iterator<Item = ConfPath>,
    {
        let name = format!("{bucket_name}/{config_name}");
        tracing::trace!(name, "Searching for collection");

        let mut result: IndexMap<String, Node> = IndexMap::new();
        let mut merged: HashMap<String, PropertyMap> = HashMap::new();
        let mut blocked: HashSet<String> = HashSet::new();

        let mut inherit_collection = false;
        let mut inherit_properties = false;
        let mut inherit = false;

        for (idx, root) in roots.enumerate() {
            let Some(item) = self.probe(&root, &name) else {
                tracing::trace!(index = idx + 1, root = %root, "No collection under candidate root");
                continue;
            };
            tracing::trace!(index = idx + 1, path = %item.path(), "Resolved collection parent");

            for child in self.store.children(item.path()) {
                if !is_collection_item(&child) || !self.include(&child, bucket_name, &mut blocked) {
                    continue;
                }

                let child_name = child.name().to_string();
                let present = result.contains_key(&child_name);
                if (!inherit || inherit_collection) && !present {
                    result.insert(child_name, child);
                } else if inherit_properties && present {
                    let recorded = match merged.get(&child_name) {
                        Some(properties) => properties,
                        None => result[&child_name].properties(),
                    };
                    let next = merge_inherited(recorded, child.properties());
                    merged.insert(child_name, next);
                }
            }

            let properties = item.properties();
            inherit_collection = self.collection_inheritance(properties);
            inherit_properties = self.property_inheritance(properties);
            inherit = inherit_collection || inherit_properties;
            if !inherit {
                break;
            }
        }

        tracing::trace!(name, count = result.len(), "Final collection resolved");

        result
            .into_iter()
            .map(|(child_name, node)| {
                let resolved = match merged.remove(&child_name) {
                    Some(properties) => ResolvedNode::with_merged(node, properties),
                    None => ResolvedNode::native(node),
                };
                (child_name, resolved)
            })
            .collect()
    }

    /// Apply the blocked set and the deciders to one child.
    fn include(&self, child: &Node, bucket_name: &str, blocked: &mut HashSet<String>) -> bool {
        if blocked.contains(child.name()) {
            return false;
        }
        match self.deciders.decide(child, bucket_name) {
            InheritanceDecision::Include => true,
            InheritanceDecision::Exclude => {
                tracing::trace!(path = %child.path(), "Collection item excluded");
                false
            }
            InheritanceDecision::Block => {
                tracing::trace!(path = %child.path(), "Collection item blocked");
                blocked.insert(child.name().to_string());
                false
            }
        }
    }
}

fn is_collection_item(child: &Node) -> bool {
    child.name() != ReservedName::ContentNode.as_str()
}
