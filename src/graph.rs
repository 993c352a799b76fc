use serde::{Deserialize, Serialize};

/// Component classes emitted by the upstream detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Boundary,
    Cache,
    Database,
    ExternalService,
    LoadBalancer,
    Monitoring,
    Security,
    Service,
    User,
}

impl NodeKind {
    /// Boundaries are the only class rendered as a container.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Boundary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boundary => "boundary",
            Self::Cache => "cache",
            Self::Database => "database",
            Self::ExternalService => "external_service",
            Self::LoadBalancer => "load_balancer",
            Self::Monitoring => "monitoring",
            Self::Security => "security",
            Self::Service => "service",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Detector bounding box, `[x0, y0, x1, y1]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(v: [f32; 4]) -> Self {
        Self {
            x0: v[0],
            y0: v[1],
            x1: v[2],
            y1: v[3],
        }
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

/// One detected component, in source-image pixel space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub bbox: BoundingBox,
    /// Detection centroid.
    pub position: Point,
    pub confidence: f32,
    /// Set when the node sits inside a boundary container.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Explicit container size; layout defaults apply when absent.
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

/// One detected flow arrow between two components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Flagged upstream when the flow crosses a trust boundary.
    #[serde(default)]
    pub cross_boundary: bool,
}

/// The graph document received from the detection service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphDescription {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
