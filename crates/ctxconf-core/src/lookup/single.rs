use super::{Lookup, ResolvedNode, merge_inherited};
use ctxconf_tree::{ConfPath, Node, PropertyMap};

impl Lookup<'_> {
    /// Find the first `<root>/<bucket>/<config name>` among `roots`.
    ///
    /// While the most recent match enables property inheritance, the search
    /// continues and each further match fills in keys still missing.
    pub fn resolve_single<I>(&self, roots: I, bucket_name: &str, config_name: &str) -> Option<ResolvedNode>
    where
        I: Iterator<Item = ConfPath>,
    {
        let name = format!("{bucket_name}/{config_name}");
        let mut found: Option<Node> = None;
        let mut merged: Option<PropertyMap> = None;

        for (idx, root) in roots.enumerate() {
            let Some(item) = self.probe(&root, &name) else {
                tracing::trace!(index = idx + 1, root = %root, "No config item under candidate root");
                continue;
            };
            tracing::debug!(index = idx + 1, path = %item.path(), "Resolved config item");

            if let Some(base) = &found {
                let accumulated = merged.as_ref().unwrap_or_else(|| base.properties());
                let next = merge_inherited(accumulated, item.properties());
                merged = Some(next);
            } else {
                found = Some(item.clone());
            }

            if !self.property_inheritance(item.properties()) {
                break;
            }
        }

        let Some(node) = found else {
            tracing::debug!(name, "Could not resolve any config item (or no permissions to read it)");
            return None;
        };

        Some(match merged {
            Some(properties) => ResolvedNode::with_merged(node, properties),
            None => ResolvedNode::native(node),
        })
    }
}
