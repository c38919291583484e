//! Collection inheritance deciders
//!
//! Deciders veto individual collection children. They are consulted in
//! reverse registration order and the first verdict other than
//! [`InheritanceDecision::Include`] wins.

use ctxconf_tree::{ConfPath, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Verdict for one collection child at one candidate root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InheritanceDecision {
    /// Keep the child
    #[default]
    Include,
    /// Drop the child at this candidate root only
    Exclude,
    /// Drop the child here and at every less specific candidate root
    Block,
}

/// Pluggable veto over collection children.
pub trait InclusionDecider: Send + Sync {
    /// Decide whether `child` of a collection in bucket `bucket_name` applies.
    fn decide(&self, child: &Node, bucket_name: &str) -> InheritanceDecision;
}

/// Ordered list of registered deciders.
#[derive(Clone, Default)]
pub struct DeciderChain {
    deciders: Vec<Arc<dyn InclusionDecider>>,
}

impl DeciderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decider; later registrations are consulted first.
    pub fn register(&mut self, decider: Arc<dyn InclusionDecider>) {
        self.deciders.push(decider);
    }

    /// Builder-style [`DeciderChain::register`].
    pub fn with(mut self, decider: impl InclusionDecider + 'static) -> Self {
        self.register(Arc::new(decider));
        self
    }

    pub fn len(&self) -> usize {
        self.deciders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deciders.is_empty()
    }

    /// Combined verdict of all deciders, most recently registered first.
    pub fn decide(&self, child: &Node, bucket_name: &str) -> InheritanceDecision {
        self.deciders
            .iter()
            .rev()
            .map(|d| d.decide(child, bucket_name))
            .find(|decision| *decision != InheritanceDecision::Include)
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for DeciderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeciderChain")
            .field("deciders", &self.deciders.len())
            .finish()
    }
}

/// Decider with a fixed verdict per child name.
///
/// Verdicts set with [`StaticDecider::exclude`] and [`StaticDecider::block`]
/// apply at every candidate root. [`StaticDecider::exclude_at`] limits an
/// exclusion to the collection below one root, so a less specific root may
/// still contribute a child of that name.
#[derive(Debug, Clone, Default)]
pub struct StaticDecider {
    decisions: HashMap<String, InheritanceDecision>,
    scoped: Vec<(ConfPath, String)>,
}

impl StaticDecider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.decisions
            .insert(name.into(), InheritanceDecision::Exclude);
        self
    }

    /// Exclude children called `name` only in collections below `root`.
    pub fn exclude_at(mut self, root: impl Into<ConfPath>, name: impl Into<String>) -> Self {
        self.scoped.push((root.into(), name.into()));
        self
    }

    pub fn block(mut self, name: impl Into<String>) -> Self {
        self.decisions.insert(name.into(), InheritanceDecision::Block);
        self
    }
}

impl InclusionDecider for StaticDecider {
    fn decide(&self, child: &Node, bucket_name: &str) -> InheritanceDecision {
        if let Some(decision) = self.decisions.get(child.name()) {
            return *decision;
        }
        let excluded = self
            .scoped
            .iter()
            .any(|(root, name)| name == child.name() && child.path().is_descendant_of(&root.join(bucket_name)));
        if excluded {
            InheritanceDecision::Exclude
        } else {
            InheritanceDecision::Include
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctxconf_tree::{ConfPath, PropertyMap};

    fn child(name: &str) -> Node {
        child_at("/conf/a", name)
    }

    fn child_at(root: &str, name: &str) -> Node {
        Node::new(ConfPath::new(root).join("settings/list").join(name), PropertyMap::new())
    }

    #[test]
    fn empty_chain_includes_everything() {
        let chain = DeciderChain::new();
        assert_eq!(chain.decide(&child("x"), "settings"), InheritanceDecision::Include);
    }

    #[test]
    fn most_recent_registration_wins() {
        let chain = DeciderChain::new()
            .with(StaticDecider::new().exclude("x"))
            .with(StaticDecider::new().block("x"));

        assert_eq!(chain.decide(&child("x"), "settings"), InheritanceDecision::Block);
    }

    #[test]
    fn include_verdicts_fall_through() {
        let chain = DeciderChain::new()
            .with(StaticDecider::new().exclude("y"))
            .with(StaticDecider::new().block("x"));

        assert_eq!(chain.decide(&child("y"), "settings"), InheritanceDecision::Exclude);
        assert_eq!(chain.decide(&child("z"), "settings"), InheritanceDecision::Include);
    }

    #[test]
    fn scoped_exclusion_applies_below_its_root_only() {
        let decider = StaticDecider::new().exclude_at("/conf/a", "x");

        assert_eq!(decider.decide(&child_at("/conf/a", "x"), "settings"), InheritanceDecision::Exclude);
        assert_eq!(decider.decide(&child_at("/conf/a/b", "x"), "settings"), InheritanceDecision::Include);
        assert_eq!(decider.decide(&child_at("/conf", "x"), "settings"), InheritanceDecision::Include);
        assert_eq!(decider.decide(&child_at("/conf/a", "y"), "settings"), InheritanceDecision::Include);
        assert_eq!(decider.decide(&child_at("/conf/a", "x"), "other"), InheritanceDecision::Include);
    }

    #[test]
    fn block_wins_over_scoped_exclusion() {
        let decider = StaticDecider::new().exclude_at("/conf/a", "x").block("x");

        assert_eq!(decider.decide(&child_at("/conf/global", "x"), "settings"), InheritanceDecision::Block);
    }

    #[test]
    fn decision_deserializes_lowercase() {
        let decision: InheritanceDecision = serde_json::from_str("\"block\"").unwrap();
        assert_eq!(decision, InheritanceDecision::Block);
    }
}
