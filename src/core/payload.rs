use crate::core::aggregator::Aggregation;
use stepgraph_types::{GraphLink, GraphNode, GraphPayload};

impl Aggregation {
    /// Build the viewer payload: one node per step record, one link per edge.
    pub fn payload(&self) -> GraphPayload {
        let nodes = self
            .records
            .iter()
            .map(|(id, record)| GraphNode {
                id: id.clone(),
                label: record.label.clone(),
                weight: record.occurrence_count,
            })
            .collect();

        let links = self
            .edges
            .iter()
            .map(|edge| GraphLink {
                source: edge.from.clone(),
                target: edge.to.clone(),
                weight: edge.count,
            })
            .collect();

        GraphPayload { nodes, links }
    }
}
