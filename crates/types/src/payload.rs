use crate::report::StepId;
use serde::{Deserialize, Serialize};

/// Data handed to the force-graph viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// One step definition; `weight` is how often it took part in a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: StepId,
    pub label: String,
    pub weight: u64,
}

/// A directed transition; `weight` is how often `source` was directly followed by `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: StepId,
    pub target: StepId,
    pub weight: u64,
}

impl GraphPayload {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}
