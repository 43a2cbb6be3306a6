use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed layout geometry for one chart.
///
/// These are named constants rather than ambient globals so tests can run
/// the layout at alternate sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side of the square chart area, before padding.
    pub canvas_size: f64,
    /// Uniform padding around the canvas on all four sides.
    pub padding: f64,
    /// Half the marker diameter; markers are centered on the mapped pixel.
    pub marker_radius: f64,
    /// Point label offset from the mapped pixel.
    pub point_label_dx: f64,
    pub point_label_dy: f64,
    /// Bounding box for axis and point labels.
    pub label_width: f64,
    pub label_height: f64,
    /// Title band above the canvas.
    pub title_y: f64,
    pub title_height: f64,
    /// X-axis labels sit this far below the horizontal midline.
    pub x_label_drop: f64,
    /// Y-axis top label sits this far above the canvas top edge.
    pub y_top_rise: f64,
    /// Y-axis bottom label sits this far below the canvas bottom edge.
    pub y_bottom_drop: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: 600.0,
            padding: 100.0,
            marker_radius: 6.0,
            point_label_dx: 10.0,
            point_label_dy: -10.0,
            label_width: 150.0,
            label_height: 20.0,
            title_y: 10.0,
            title_height: 40.0,
            x_label_drop: 10.0,
            y_top_rise: 30.0,
            y_bottom_drop: 10.0,
        }
    }
}

impl LayoutConfig {
    pub fn total_width(&self) -> f64 {
        self.canvas_size + self.padding * 2.0
    }

    pub fn total_height(&self) -> f64 {
        self.canvas_size + self.padding * 2.0
    }
}

/// Page metadata stamped on the emitted `mxGraphModel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub grid: bool,
    pub grid_size: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 827,
            height: 1169,
            scale: 1,
            grid: true,
            grid_size: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub page: PageConfig,
    pub theme: Theme,
}

/// Load a config JSON file, falling back to defaults when no path is given.
/// Every field is optional; present fields override the default value.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_size, 600.0);
        assert_eq!(config.padding, 100.0);
        assert_eq!(config.total_width(), 800.0);
        assert_eq!(config.total_height(), 800.0);
    }

    #[test]
    fn partial_config_file_merges_over_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"layout": {"canvas_size": 300.0}}"#).unwrap();
        assert_eq!(config.layout.canvas_size, 300.0);
        assert_eq!(config.layout.padding, 100.0);
        assert_eq!(config.page.width, 827);
        assert_eq!(config.theme.point_top_right, "#28a745");
    }
}
