use crate::config::LayoutConfig;
use crate::graph::{GraphDescription, Point};

use super::hierarchy::Slot;

/// One deterministic O(n²) pass pushing crowded root nodes apart.
///
/// Every distance is measured on a pre-pass snapshot of the local
/// positions, so one pair's correction never feeds into another pair's
/// distance and the result is independent of scan order. A single pass
/// only biases nodes away from their nearest collisions; callers must not
/// assume zero overlap afterwards. Contained nodes are never moved, their
/// frame is defined by their container.
pub(super) fn separate(graph: &GraphDescription, slots: &mut [Slot], config: &LayoutConfig) {
    let roots: Vec<usize> = (0..graph.nodes.len())
        .filter(|&slot| graph.nodes[slot].parent_id.is_none())
        .collect();
    let snapshot: Vec<Point> = slots.iter().map(|slot| slot.local).collect();

    for &a in &roots {
        let mut shift = Point::default();
        for &b in &roots {
            if a == b {
                continue;
            }
            let dx = snapshot[a].x - snapshot[b].x;
            let dy = snapshot[a].y - snapshot[b].y;
            let distance = (dx * dx + dy * dy).sqrt();
            // Coincident nodes stay coincident, the push direction would
            // be undefined.
            if distance > 0.0 && distance < config.min_distance {
                let angle = dy.atan2(dx);
                let push = (config.min_distance - distance) / 2.0;
                shift.x += angle.cos() * push;
                shift.y += angle.sin() * push;
            }
        }
        slots[a].local = snapshot[a] + shift;
    }
}
