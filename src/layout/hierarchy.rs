use crate::config::LayoutConfig;
use crate::graph::{GraphDescription, Point};

use super::error::LayoutError;
use super::index::GraphIndex;

/// Working record for one node, filled in stage by stage. Slot order is
/// input order.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Slot {
    pub local: Point,
    pub absolute: Option<Point>,
    pub width: f32,
    pub height: f32,
    pub is_container: bool,
}

/// Assign every node its coordinate frame and render size.
///
/// Roots are placed at the detection centroid, pulled toward the origin by
/// half the viewport padding. Contained nodes get an offset inside the
/// parent's detector box, inset to leave room for the container label.
pub(super) fn place(
    graph: &GraphDescription,
    index: &GraphIndex,
    config: &LayoutConfig,
) -> Vec<Slot> {
    graph
        .nodes
        .iter()
        .map(|node| {
            let parent = node
                .parent_id
                .as_deref()
                .and_then(|id| index.slot(id))
                .map(|slot| &graph.nodes[slot]);
            let local = match parent {
                Some(parent) => Point::new(
                    node.bbox.x0 - parent.bbox.x0 + config.child_inset_x,
                    node.bbox.y0 - parent.bbox.y0 + config.child_inset_y,
                ),
                None => Point::new(
                    node.position.x - config.viewport_padding / 2.0,
                    node.position.y - config.viewport_padding / 2.0,
                ),
            };
            let is_container = node.kind.is_container();
            let (width, height) = if is_container {
                (
                    node.width.unwrap_or(config.container_width),
                    node.height.unwrap_or(config.container_height),
                )
            } else {
                (config.node_width, config.node_height)
            };
            Slot {
                local,
                absolute: None,
                width,
                height,
                is_container,
            }
        })
        .collect()
}

/// Resolve absolute positions by walking each containment chain up to a
/// root, memoizing along the way so every node is resolved at most once
/// per run. The walk is bounded by the node count: a parent cycle that
/// never reaches a root surfaces as an error instead of looping.
pub(super) fn resolve_absolutes(
    graph: &GraphDescription,
    index: &GraphIndex,
    slots: &mut [Slot],
) -> Result<(), LayoutError> {
    for start in 0..slots.len() {
        if slots[start].absolute.is_some() {
            continue;
        }

        // Climb until a root or an already-resolved ancestor.
        let mut chain = vec![start];
        let mut current = start;
        loop {
            let Some(parent) = index.parent_slot(graph, current) else {
                break;
            };
            if chain.len() > graph.nodes.len() {
                return Err(LayoutError::Cycle {
                    id: graph.nodes[start].id.clone(),
                });
            }
            chain.push(parent);
            if slots[parent].absolute.is_some() {
                break;
            }
            current = parent;
        }

        // Fold positions back down the chain. The topmost entry is either
        // a root or an already-resolved ancestor.
        let mut parent_abs: Option<Point> = None;
        for &slot in chain.iter().rev() {
            let resolved = match (slots[slot].absolute, parent_abs) {
                (Some(done), _) => done,
                (None, Some(parent)) => slots[slot].local + parent,
                (None, None) => slots[slot].local,
            };
            slots[slot].absolute = Some(resolved);
            parent_abs = Some(resolved);
        }
    }

    Ok(())
}
