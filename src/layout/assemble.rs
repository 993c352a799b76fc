use crate::config::LayoutConfig;
use crate::graph::GraphDescription;
use crate::theme::Theme;

use super::hierarchy::Slot;
use super::types::{Layout, LayoutEdge, LayoutNode, Ports, Side};

/// Merge the resolved slots, edge sides and port maps into the final
/// layout handed to the rendering surface. Input order is preserved for
/// both nodes and edges.
pub(super) fn assemble(
    graph: &GraphDescription,
    slots: Vec<Slot>,
    edge_sides: Vec<(Side, Side)>,
    ports: Vec<Ports>,
    theme: &Theme,
    config: &LayoutConfig,
) -> Layout {
    let nodes: Vec<LayoutNode> = graph
        .nodes
        .iter()
        .zip(slots)
        .zip(ports)
        .map(|((node, slot), ports)| LayoutNode {
            id: node.id.clone(),
            kind: node.kind,
            local: slot.local,
            absolute: slot.absolute.unwrap_or(slot.local),
            parent_id: node.parent_id.clone(),
            is_container: slot.is_container,
            width: slot.width,
            height: slot.height,
            fill: theme.fill_for(node.kind).to_string(),
            confidence: node.confidence,
            ports,
        })
        .collect();

    let edges: Vec<LayoutEdge> = graph
        .edges
        .iter()
        .zip(edge_sides)
        .map(|(edge, (source_side, target_side))| LayoutEdge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            source_side,
            target_side,
            cross_boundary: edge.cross_boundary,
        })
        .collect();

    let (width, height) = extent(&nodes, config);

    Layout {
        nodes,
        edges,
        width,
        height,
    }
}

/// Canvas extent: the largest absolute box corner, clamped at the origin,
/// plus the margin. An empty graph keeps a zero extent so the caller can
/// render its placeholder.
fn extent(nodes: &[LayoutNode], config: &LayoutConfig) -> (f32, f32) {
    if nodes.is_empty() {
        return (0.0, 0.0);
    }
    let mut max_x = 0.0f32;
    let mut max_y = 0.0f32;
    for node in nodes {
        max_x = max_x.max(node.absolute.x + node.width);
        max_y = max_y.max(node.absolute.y + node.height);
    }
    (max_x + config.canvas_margin, max_y + config.canvas_margin)
}
