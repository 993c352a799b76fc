use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::graph::{NodeKind, Point};
use crate::layout::{Layout, PortUse, Ports, Side};

/// Wire form of a layout, shaped for the rendering surface. Field names
/// are camelCase on the wire; only used ports are emitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub absolute_position: Point,
    pub local_position: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub is_container: bool,
    pub width: f32,
    pub height: f32,
    pub fill: String,
    pub confidence: f32,
    pub ports: PortsDump,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortsDump {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<PortDump>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<PortDump>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<PortDump>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<PortDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDump {
    pub as_source: bool,
    pub as_target: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDump {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_side: Side,
    pub target_side: Side,
    pub cross_boundary: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                kind: node.kind,
                absolute_position: node.absolute,
                local_position: node.local,
                parent_id: node.parent_id.clone(),
                is_container: node.is_container,
                width: node.width,
                height: node.height,
                fill: node.fill.clone(),
                confidence: node.confidence,
                ports: dump_ports(&node.ports),
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                source_side: edge.source_side,
                target_side: edge.target_side,
                cross_boundary: edge.cross_boundary,
            })
            .collect();

        Self {
            nodes,
            edges,
            width: layout.width,
            height: layout.height,
        }
    }

    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn write_json(&self, path: &Path, pretty: bool) -> anyhow::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

fn dump_ports(ports: &Ports) -> PortsDump {
    PortsDump {
        top: ports.top.map(dump_port),
        right: ports.right.map(dump_port),
        bottom: ports.bottom.map(dump_port),
        left: ports.left.map(dump_port),
    }
}

fn dump_port(usage: PortUse) -> PortDump {
    PortDump {
        as_source: usage.as_source,
        as_target: usage.as_target,
    }
}
