use crate::config::LayoutConfig;
use crate::ir::ChartModel;
use crate::theme::Theme;

/// Geometry of one emitted cell: an axis-aligned box for vertices, a
/// source/target point pair for edges.
#[derive(Debug, Clone, PartialEq)]
pub enum CellGeometry {
    Vertex {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Edge {
        source: (f64, f64),
        target: (f64, f64),
    },
}

/// One shape to emit: text value, mxGraph style string, geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: String,
    pub style: String,
    pub geometry: CellGeometry,
}

impl Cell {
    fn vertex(value: impl Into<String>, style: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            value: value.into(),
            style: style.into(),
            geometry: CellGeometry::Vertex { x, y, width, height },
        }
    }

    fn edge(style: impl Into<String>, source: (f64, f64), target: (f64, f64)) -> Self {
        Self {
            value: String::new(),
            style: style.into(),
            geometry: CellGeometry::Edge { source, target },
        }
    }
}

/// Ordered cell list for one chart. Order is z-order: later cells stack on
/// top of earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub cells: Vec<Cell>,
    pub width: f64,
    pub height: f64,
}

const TITLE_STYLE: &str = "text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=24;fontStyle=1";

/// Map a normalized data point into canvas pixel space. Data `y` grows
/// upward while pixel `y` grows downward, so the vertical axis is inverted.
pub fn map_point(x: f64, y: f64, config: &LayoutConfig) -> (f64, f64) {
    let px = config.padding + x * config.canvas_size;
    let py = config.padding + config.canvas_size - y * config.canvas_size;
    (px, py)
}

/// Marker fill by coordinate half-plane. The four buckets are exclusive and
/// exhaustive for clamped coordinates; the fallback is unreachable but kept
/// so the function is total.
fn point_color<'t>(x: f64, y: f64, theme: &'t Theme) -> &'t str {
    if x >= 0.5 && y >= 0.5 {
        &theme.point_top_right
    } else if x < 0.5 && y >= 0.5 {
        &theme.point_top_left
    } else if x < 0.5 && y < 0.5 {
        &theme.point_bottom_left
    } else if x >= 0.5 && y < 0.5 {
        &theme.point_bottom_right
    } else {
        &theme.point_fallback
    }
}

/// Compute the full cell list for a chart, in emission order: title,
/// container, quadrant watermarks, grid dividers, axis labels, then one
/// marker plus one label per point in model order.
pub fn compute_layout(model: &ChartModel, config: &LayoutConfig, theme: &Theme) -> Layout {
    let canvas = config.canvas_size;
    let padding = config.padding;
    let half = canvas / 2.0;
    let mid_x = padding + half;
    let mid_y = padding + half;

    let mut cells = Vec::with_capacity(12 + model.points.len() * 2);

    cells.push(Cell::vertex(
        &model.title,
        TITLE_STYLE,
        padding,
        config.title_y,
        canvas,
        config.title_height,
    ));

    cells.push(Cell::vertex(
        "",
        format!(
            "rounded=0;whiteSpace=wrap;html=1;fillColor={};strokeColor={};",
            theme.container_fill, theme.container_stroke
        ),
        padding,
        padding,
        canvas,
        canvas,
    ));

    // Watermarks over the 2x2 grid. q1 sits top-right, not top-left.
    let watermark_style = format!(
        "text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=20;fontColor={};fontStyle=1;",
        theme.watermark_color
    );
    cells.push(Cell::vertex(&model.quadrants.q2, &watermark_style, padding, padding, half, half));
    cells.push(Cell::vertex(&model.quadrants.q1, &watermark_style, mid_x, padding, half, half));
    cells.push(Cell::vertex(&model.quadrants.q3, &watermark_style, padding, mid_y, half, half));
    cells.push(Cell::vertex(&model.quadrants.q4, &watermark_style, mid_x, mid_y, half, half));

    let divider_style = format!(
        "endArrow=none;html=1;strokeWidth=2;strokeColor={};dashed=1;",
        theme.grid_line_color
    );
    cells.push(Cell::edge(&divider_style, (mid_x, padding), (mid_x, padding + canvas)));
    cells.push(Cell::edge(&divider_style, (padding, mid_y), (padding + canvas, mid_y)));

    let axis_style = format!(
        "text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=12;fontStyle=2;fontColor={};",
        theme.axis_label_color
    );
    let label_w = config.label_width;
    let label_h = config.label_height;
    cells.push(Cell::vertex(
        &model.x_axis.left,
        format!("{axis_style}align=left;"),
        padding,
        mid_y + config.x_label_drop,
        label_w,
        label_h,
    ));
    cells.push(Cell::vertex(
        &model.x_axis.right,
        format!("{axis_style}align=right;"),
        padding + canvas - label_w,
        mid_y + config.x_label_drop,
        label_w,
        label_h,
    ));
    cells.push(Cell::vertex(
        &model.y_axis.top,
        &axis_style,
        mid_x - label_w / 2.0,
        padding - config.y_top_rise,
        label_w,
        label_h,
    ));
    cells.push(Cell::vertex(
        &model.y_axis.bottom,
        &axis_style,
        mid_x - label_w / 2.0,
        padding + canvas + config.y_bottom_drop,
        label_w,
        label_h,
    ));

    let point_label_style = format!(
        "text;html=1;strokeColor=none;fillColor=none;align=left;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=11;fontColor={};fontStyle=1",
        theme.point_label_color
    );
    for point in &model.points {
        let (px, py) = map_point(point.x(), point.y(), config);
        let r = config.marker_radius;
        cells.push(Cell::vertex(
            "",
            format!(
                "ellipse;whiteSpace=wrap;html=1;aspect=fixed;fillColor={};strokeColor=none;",
                point_color(point.x(), point.y(), theme)
            ),
            px - r,
            py - r,
            r * 2.0,
            r * 2.0,
        ));
        cells.push(Cell::vertex(
            &point.label,
            &point_label_style,
            px + config.point_label_dx,
            py + config.point_label_dy,
            label_w,
            label_h,
        ));
    }

    Layout {
        cells,
        width: config.total_width(),
        height: config.total_height(),
    }
}
