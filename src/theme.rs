use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::graph::NodeKind;

/// Default per-class palette used by the rendering surface for color mapping.
static DETECTOR_PALETTE: Lazy<BTreeMap<NodeKind, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (NodeKind::Boundary, "#ef4444"),
        (NodeKind::Cache, "#f59e0b"),
        (NodeKind::Database, "#3b82f6"),
        (NodeKind::ExternalService, "#8b5cf6"),
        (NodeKind::LoadBalancer, "#10b981"),
        (NodeKind::Monitoring, "#06b6d4"),
        (NodeKind::Security, "#f97316"),
        (NodeKind::Service, "#6366f1"),
        (NodeKind::User, "#ec4899"),
    ])
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub fill: BTreeMap<NodeKind, String>,
    pub edge_color: String,
    pub fallback_fill: String,
}

impl Theme {
    pub fn detector_default() -> Self {
        Self {
            fill: DETECTOR_PALETTE
                .iter()
                .map(|(kind, color)| (*kind, (*color).to_string()))
                .collect(),
            edge_color: "#64748b".to_string(),
            fallback_fill: "#9ca3af".to_string(),
        }
    }

    /// Resolve the fill color for a component class.
    pub fn fill_for(&self, kind: NodeKind) -> &str {
        self.fill
            .get(&kind)
            .map(String::as_str)
            .unwrap_or(self.fallback_fill.as_str())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detector_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_covers_every_kind() {
        let theme = Theme::detector_default();
        for kind in [
            NodeKind::Boundary,
            NodeKind::Cache,
            NodeKind::Database,
            NodeKind::ExternalService,
            NodeKind::LoadBalancer,
            NodeKind::Monitoring,
            NodeKind::Security,
            NodeKind::Service,
            NodeKind::User,
        ] {
            assert!(theme.fill_for(kind).starts_with('#'), "{:?}", kind);
        }
    }

    #[test]
    fn missing_entry_falls_back() {
        let mut theme = Theme::detector_default();
        theme.fill.remove(&NodeKind::Cache);
        assert_eq!(theme.fill_for(NodeKind::Cache), theme.fallback_fill);
    }
}
