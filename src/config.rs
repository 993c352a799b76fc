use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::NodeKind;
use crate::theme::Theme;

/// Tunables for the layout pipeline. All distances are canvas units
/// (source-image pixels).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport padding; root nodes are shifted by half of it on both axes.
    pub viewport_padding: f32,
    /// Minimum separation between root nodes before the collision pass
    /// pushes them apart.
    pub min_distance: f32,
    /// Left inset of a contained node inside its parent box.
    pub child_inset_x: f32,
    /// Top inset of a contained node, leaving room for the container label.
    pub child_inset_y: f32,
    /// Container size when the input carries no explicit dimensions.
    pub container_width: f32,
    pub container_height: f32,
    /// Fixed box size for leaf nodes.
    pub node_width: f32,
    pub node_height: f32,
    /// Slack added around the computed canvas extent.
    pub canvas_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_padding: 200.0,
            min_distance: 150.0,
            child_inset_x: 10.0,
            child_inset_y: 30.0,
            container_width: 300.0,
            container_height: 200.0,
            node_width: 150.0,
            node_height: 50.0,
            canvas_margin: 24.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub theme: Theme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    layout: Option<LayoutSection>,
    theme: Option<ThemeSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayoutSection {
    viewport_padding: Option<f32>,
    min_distance: Option<f32>,
    child_inset_x: Option<f32>,
    child_inset_y: Option<f32>,
    container_width: Option<f32>,
    container_height: Option<f32>,
    node_width: Option<f32>,
    node_height: Option<f32>,
    canvas_margin: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeSection {
    fill: Option<BTreeMap<NodeKind, String>>,
    edge_color: Option<String>,
    fallback_fill: Option<String>,
}

/// Load a config file, overriding only the keys it carries. Files are
/// parsed as JSON first, falling back to JSON5 for lenient hand-written
/// configs.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(&contents)?,
    };

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.viewport_padding {
            config.layout.viewport_padding = v;
        }
        if let Some(v) = layout.min_distance {
            config.layout.min_distance = v;
        }
        if let Some(v) = layout.child_inset_x {
            config.layout.child_inset_x = v;
        }
        if let Some(v) = layout.child_inset_y {
            config.layout.child_inset_y = v;
        }
        if let Some(v) = layout.container_width {
            config.layout.container_width = v;
        }
        if let Some(v) = layout.container_height {
            config.layout.container_height = v;
        }
        if let Some(v) = layout.node_width {
            config.layout.node_width = v;
        }
        if let Some(v) = layout.node_height {
            config.layout.node_height = v;
        }
        if let Some(v) = layout.canvas_margin {
            config.layout.canvas_margin = v;
        }
    }

    if let Some(theme) = parsed.theme {
        if let Some(fill) = theme.fill {
            for (kind, color) in fill {
                config.theme.fill.insert(kind, color);
            }
        }
        if let Some(v) = theme.edge_color {
            config.theme.edge_color = v;
        }
        if let Some(v) = theme.fallback_fill {
            config.theme.fallback_fill = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        path
    }

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.layout.viewport_padding, 200.0);
        assert_eq!(config.layout.min_distance, 150.0);
    }

    #[test]
    fn partial_file_overrides_only_present_keys() {
        let path = write_temp(
            "archgraph_config_partial.json",
            r#"{"layout": {"min_distance": 180.0}}"#,
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout.min_distance, 180.0);
        assert_eq!(config.layout.viewport_padding, 200.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn json5_fallback_accepts_comments() {
        let path = write_temp(
            "archgraph_config_json5.json",
            "{\n  // hand-written override\n  layout: { node_width: 120, },\n}\n",
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout.node_width, 120.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn theme_fill_overrides_merge() {
        let path = write_temp(
            "archgraph_config_theme.json",
            r##"{"theme": {"fill": {"service": "#000000"}}}"##,
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.theme.fill_for(NodeKind::Service), "#000000");
        assert_eq!(config.theme.fill_for(NodeKind::Database), "#3b82f6");
        std::fs::remove_file(path).ok();
    }
}
