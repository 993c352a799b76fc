use std::collections::HashMap;

use crate::graph::GraphDescription;

use super::error::LayoutError;

/// O(1) id lookup over the input lists. Slot numbers are input positions,
/// so iterating slots in order preserves input order.
#[derive(Debug)]
pub(super) struct GraphIndex {
    slots: HashMap<String, usize>,
}

impl GraphIndex {
    /// Validates referential integrity and builds the id lookup. Rejects
    /// duplicate node ids and any edge endpoint or parent_id that does not
    /// resolve to a node.
    pub fn build(graph: &GraphDescription) -> Result<Self, LayoutError> {
        let mut slots = HashMap::with_capacity(graph.nodes.len());
        for (slot, node) in graph.nodes.iter().enumerate() {
            if slots.insert(node.id.clone(), slot).is_some() {
                return Err(LayoutError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        for node in &graph.nodes {
            if let Some(parent_id) = node.parent_id.as_deref() {
                if !slots.contains_key(parent_id) {
                    return Err(LayoutError::UnknownNode {
                        id: parent_id.to_string(),
                        referenced_by: node.id.clone(),
                    });
                }
            }
        }

        for edge in &graph.edges {
            for endpoint in [edge.source.as_str(), edge.target.as_str()] {
                if !slots.contains_key(endpoint) {
                    return Err(LayoutError::UnknownNode {
                        id: endpoint.to_string(),
                        referenced_by: edge.id.clone(),
                    });
                }
            }
        }

        Ok(Self { slots })
    }

    pub fn slot(&self, id: &str) -> Option<usize> {
        self.slots.get(id).copied()
    }

    pub fn parent_slot(&self, graph: &GraphDescription, slot: usize) -> Option<usize> {
        graph.nodes[slot]
            .parent_id
            .as_deref()
            .and_then(|id| self.slot(id))
    }
}
