//! A decider that records every question it is asked.

use ctxconf_core::{InclusionDecider, InheritanceDecision};
use ctxconf_tree::{ConfPath, Node};
use std::collections::HashMap;
use std::sync::Mutex;

/// Returns fixed decisions per child name and records each call.
///
/// # Example
///
/// ```rust
/// use ctxconf_core::InheritanceDecision;
/// use ctxconf_test_utils::RecordingDecider;
///
/// let decider = RecordingDecider::new().with_decision("x", InheritanceDecision::Block);
/// assert!(decider.calls().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingDecider {
    decisions: HashMap<String, InheritanceDecision>,
    calls: Mutex<Vec<(ConfPath, String)>>,
}

impl RecordingDecider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `decision` for every child called `name`.
    pub fn with_decision(mut self, name: &str, decision: InheritanceDecision) -> Self {
        self.decisions.insert(name.to_string(), decision);
        self
    }

    /// `(child path, bucket name)` of every call so far, in call order.
    pub fn calls(&self) -> Vec<(ConfPath, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl InclusionDecider for RecordingDecider {
    fn decide(&self, child: &Node, bucket_name: &str) -> InheritanceDecision {
        self.calls
            .lock()
            .unwrap()
            .push((child.path().clone(), bucket_name.to_string()));
        self.decisions
            .get(child.name())
            .copied()
            .unwrap_or_default()
    }
}
