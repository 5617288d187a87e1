use crate::core::aggregator::Aggregation;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;
use stepgraph_types::StepId;

/// Node weight carrying the step label.
struct StepNode {
    label: String,
}

impl fmt::Display for StepNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Edge weight carrying the transition count.
struct TransitionData {
    count: u64,
}

impl fmt::Display for TransitionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}

fn build_graph(aggregation: &Aggregation) -> DiGraph<StepNode, TransitionData> {
    let mut graph = DiGraph::new();
    let mut node_map: HashMap<&StepId, NodeIndex> = HashMap::new();

    for (id, record) in &aggregation.records {
        let idx = graph.add_node(StepNode {
            label: record.label.clone(),
        });
        node_map.insert(id, idx);
    }

    for edge in &aggregation.edges {
        if let (Some(&from), Some(&to)) = (node_map.get(&edge.from), node_map.get(&edge.to)) {
            graph.add_edge(from, to, TransitionData { count: edge.count });
        }
    }

    graph
}

/// Render the step graph as a Graphviz DOT string using petgraph.
///
/// Nodes are numbered in first-seen order; petgraph escapes quotes in labels.
pub fn aggregation_to_dot(aggregation: &Aggregation) -> String {
    let graph = build_graph(aggregation);
    format!("{}", Dot::new(&graph))
}
