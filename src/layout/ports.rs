use crate::graph::{GraphDescription, Point};

use super::hierarchy::Slot;
use super::index::GraphIndex;
use super::types::{Ports, Side};

/// Pick the attachment sides for one edge from the absolute positions of
/// its endpoints. The dominant displacement axis decides the side pair;
/// an exact tie counts as vertical.
pub(super) fn classify(source: Point, target: Point) -> (Side, Side) {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            (Side::Right, Side::Left)
        } else {
            (Side::Left, Side::Right)
        }
    } else if dy > 0.0 {
        (Side::Bottom, Side::Top)
    } else {
        (Side::Top, Side::Bottom)
    }
}

/// Assign sides to every edge, then fold the assignments into per-node
/// port maps. Two passes over immutable input, no scratch state carried
/// between them.
pub(super) fn assign(
    graph: &GraphDescription,
    index: &GraphIndex,
    slots: &[Slot],
) -> (Vec<(Side, Side)>, Vec<Ports>) {
    let edge_sides: Vec<(Side, Side)> = graph
        .edges
        .iter()
        .map(|edge| {
            match (
                endpoint(index, slots, &edge.source),
                endpoint(index, slots, &edge.target),
            ) {
                (Some(source), Some(target)) => classify(source, target),
                // Unreachable after validation; keep the renderer fed.
                _ => (Side::Right, Side::Left),
            }
        })
        .collect();

    let mut ports = vec![Ports::default(); graph.nodes.len()];
    for (edge, &(source_side, target_side)) in graph.edges.iter().zip(&edge_sides) {
        if let Some(slot) = index.slot(&edge.source) {
            ports[slot].mark_source(source_side);
        }
        if let Some(slot) = index.slot(&edge.target) {
            ports[slot].mark_target(target_side);
        }
    }

    (edge_sides, ports)
}

fn endpoint(index: &GraphIndex, slots: &[Slot], id: &str) -> Option<Point> {
    index.slot(id).and_then(|slot| slots[slot].absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::hierarchy;
    use crate::layout::test_support::{edge, node};

    fn assigned(graph: &GraphDescription) -> (Vec<(Side, Side)>, Vec<Ports>) {
        let config = LayoutConfig::default();
        let index = GraphIndex::build(graph).expect("valid graph");
        let mut slots = hierarchy::place(graph, &index, &config);
        hierarchy::resolve_absolutes(graph, &index, &mut slots).expect("no cycles");
        assign(graph, &index, &slots)
    }

    #[test]
    fn horizontal_dominance_uses_right_and_left() {
        assert_eq!(
            classify(Point::new(0.0, 0.0), Point::new(100.0, 10.0)),
            (Side::Right, Side::Left)
        );
        assert_eq!(
            classify(Point::new(100.0, 10.0), Point::new(0.0, 0.0)),
            (Side::Left, Side::Right)
        );
    }

    #[test]
    fn vertical_dominance_uses_bottom_and_top() {
        assert_eq!(
            classify(Point::new(0.0, 0.0), Point::new(10.0, 100.0)),
            (Side::Bottom, Side::Top)
        );
        assert_eq!(
            classify(Point::new(10.0, 100.0), Point::new(0.0, 0.0)),
            (Side::Top, Side::Bottom)
        );
    }

    #[test]
    fn exact_tie_counts_as_vertical() {
        assert_eq!(
            classify(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            (Side::Bottom, Side::Top)
        );
    }

    #[test]
    fn coincident_endpoints_fall_to_top_bottom() {
        assert_eq!(
            classify(Point::new(5.0, 5.0), Point::new(5.0, 5.0)),
            (Side::Top, Side::Bottom)
        );
    }

    #[test]
    fn duplicate_side_uses_merge_into_one_port() {
        let graph = GraphDescription {
            nodes: vec![
                node("a", 0.0, 0.0),
                node("c", 0.0, 300.0),
                node("b", 600.0, 150.0),
            ],
            edges: vec![edge("e1", "a", "b"), edge("e2", "c", "b")],
        };
        let (_, ports) = assigned(&graph);
        let b = ports[2];
        let left = b.left.expect("left port in use");
        assert!(left.as_target);
        assert!(!left.as_source);
        assert!(b.right.is_none() && b.top.is_none() && b.bottom.is_none());
        assert_eq!(b.iter().count(), 1);
    }

    #[test]
    fn both_roles_share_a_single_port() {
        let graph = GraphDescription {
            nodes: vec![node("a", 0.0, 0.0), node("b", 600.0, 0.0)],
            edges: vec![edge("e1", "a", "b"), edge("e2", "b", "a")],
        };
        let (sides, ports) = assigned(&graph);
        assert_eq!(sides[0], (Side::Right, Side::Left));
        assert_eq!(sides[1], (Side::Left, Side::Right));
        let a_right = ports[0].right.expect("a uses right");
        assert!(a_right.is_bidirectional());
        let b_left = ports[1].left.expect("b uses left");
        assert!(b_left.is_bidirectional());
    }

    #[test]
    fn unused_sides_are_absent() {
        let graph = GraphDescription {
            nodes: vec![node("a", 0.0, 0.0), node("b", 600.0, 0.0)],
            edges: vec![edge("e1", "a", "b")],
        };
        let (_, ports) = assigned(&graph);
        assert!(ports[0].left.is_none());
        assert!(ports[0].top.is_none());
        assert!(ports[0].bottom.is_none());
        assert!(ports[0].right.is_some());
    }

    #[test]
    fn assignment_is_idempotent() {
        let graph = GraphDescription {
            nodes: vec![
                node("a", 0.0, 0.0),
                node("b", 600.0, 150.0),
                node("c", 300.0, 600.0),
            ],
            edges: vec![edge("e1", "a", "b"), edge("e2", "b", "c")],
        };
        let first = assigned(&graph);
        let second = assigned(&graph);
        assert_eq!(first, second);
    }
}
