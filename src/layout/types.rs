use serde::Serialize;

use crate::graph::{NodeKind, Point};

/// Attachment side of an edge endpoint on a node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Roles observed on one attachment side. A side used by both an outgoing
/// and an incoming edge stays a single port with both flags set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PortUse {
    pub as_source: bool,
    pub as_target: bool,
}

impl PortUse {
    pub fn is_bidirectional(self) -> bool {
        self.as_source && self.as_target
    }
}

/// Per-node port map. A side is present only if at least one edge uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ports {
    pub top: Option<PortUse>,
    pub right: Option<PortUse>,
    pub bottom: Option<PortUse>,
    pub left: Option<PortUse>,
}

impl Ports {
    pub fn get(&self, side: Side) -> Option<PortUse> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<PortUse> {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    pub(super) fn mark_source(&mut self, side: Side) {
        self.slot_mut(side).get_or_insert_with(PortUse::default).as_source = true;
    }

    pub(super) fn mark_target(&mut self, side: Side) {
        self.slot_mut(side).get_or_insert_with(PortUse::default).as_target = true;
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Used sides in top/right/bottom/left order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, PortUse)> + '_ {
        [Side::Top, Side::Right, Side::Bottom, Side::Left]
            .into_iter()
            .filter_map(|side| self.get(side).map(|usage| (side, usage)))
    }
}

/// Final placement record for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    pub kind: NodeKind,
    /// Relative to the parent's top-left corner, or absolute for roots.
    pub local: Point,
    /// Canvas coordinates after walking the containment chain.
    pub absolute: Point,
    pub parent_id: Option<String>,
    /// Containers are rendered behind their children.
    pub is_container: bool,
    pub width: f32,
    pub height: f32,
    /// Style category resolved from the node kind, consumed by the renderer.
    pub fill: String,
    pub confidence: f32,
    pub ports: Ports,
}

/// Final record for one edge: which side of each endpoint it attaches to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_side: Side,
    pub target_side: Side,
    pub cross_boundary: bool,
}

/// The renderable layout. Node and edge order match the input exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
