use serde::{Deserialize, Serialize};

/// Colors used by the layout pass when assembling mxGraph style strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub container_fill: String,
    pub container_stroke: String,
    pub watermark_color: String,
    pub grid_line_color: String,
    pub axis_label_color: String,
    pub point_label_color: String,
    /// Marker fill for points with `x >= 0.5, y >= 0.5`.
    pub point_top_right: String,
    /// Marker fill for points with `x < 0.5, y >= 0.5`.
    pub point_top_left: String,
    /// Marker fill for points with `x < 0.5, y < 0.5`.
    pub point_bottom_left: String,
    /// Marker fill for points with `x >= 0.5, y < 0.5`.
    pub point_bottom_right: String,
    /// Unreachable for clamped coordinates; kept as a neutral fallback.
    pub point_fallback: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            container_fill: "#ffffff".to_string(),
            container_stroke: "#666666".to_string(),
            watermark_color: "#e0e0e0".to_string(),
            grid_line_color: "#b0b0b0".to_string(),
            axis_label_color: "#333333".to_string(),
            point_label_color: "#000000".to_string(),
            point_top_right: "#28a745".to_string(),
            point_top_left: "#007bff".to_string(),
            point_bottom_left: "#6c757d".to_string(),
            point_bottom_right: "#ffc107".to_string(),
            point_fallback: "#999999".to_string(),
        }
    }
}
