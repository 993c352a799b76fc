mod assemble;
mod error;
mod hierarchy;
mod index;
mod ports;
mod separation;
pub(crate) mod types;

pub use error::LayoutError;
pub use types::*;

use crate::config::LayoutConfig;
use crate::graph::GraphDescription;
use crate::theme::Theme;

use index::GraphIndex;

/// Compute a renderable layout from a detected graph.
///
/// Pure function of its inputs: validation, coordinate-frame resolution,
/// one collision-separation pass over root nodes, port assignment, then
/// assembly. No state survives between invocations; an invalid graph is
/// rejected before any layout work happens.
pub fn compute_layout(
    graph: &GraphDescription,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    let index = GraphIndex::build(graph)?;
    let mut slots = hierarchy::place(graph, &index, config);
    separation::separate(graph, &mut slots, config);
    hierarchy::resolve_absolutes(graph, &index, &mut slots)?;
    let (edge_sides, node_ports) = ports::assign(graph, &index, &slots);
    Ok(assemble::assemble(
        graph, slots, edge_sides, node_ports, theme, config,
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::graph::{BoundingBox, GraphEdge, GraphNode, NodeKind, Point};

    /// Root service node with a 100x50 detector box centered on (x, y).
    pub fn node(id: &str, x: f32, y: f32) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            kind: NodeKind::Service,
            bbox: BoundingBox {
                x0: x - 50.0,
                y0: y - 25.0,
                x1: x + 50.0,
                y1: y + 25.0,
            },
            position: Point::new(x, y),
            confidence: 0.9,
            parent_id: None,
            width: None,
            height: None,
        }
    }

    pub fn node_in(id: &str, x: f32, y: f32, parent: &str) -> GraphNode {
        let mut node = node(id, x, y);
        node.parent_id = Some(parent.to_string());
        node
    }

    pub fn boundary(id: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            kind: NodeKind::Boundary,
            bbox: BoundingBox { x0, y0, x1, y1 },
            position: Point::new((x0 + x1) / 2.0, (y0 + y1) / 2.0),
            confidence: 0.85,
            parent_id: None,
            width: None,
            height: None,
        }
    }

    pub fn edge(id: &str, source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            cross_boundary: false,
        }
    }
}
