/// Title used when the source text carries no `title` directive.
pub const DEFAULT_TITLE: &str = "Quadrant Chart";

/// Parsed semantic representation of one quadrant chart.
///
/// Built once by the parser, consumed once by the layout pass. Labels that
/// were not present in the source stay as empty strings rather than options;
/// the renderer emits them as empty text cells either way.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: String,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub quadrants: QuadrantLabels,
    pub points: Vec<Point>,
}

impl Default for ChartModel {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_axis: XAxis::default(),
            y_axis: YAxis::default(),
            quadrants: QuadrantLabels::default(),
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XAxis {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YAxis {
    pub bottom: String,
    pub top: String,
}

/// The four quadrant labels. Position mapping is fixed: q1 is top-right,
/// q2 top-left, q3 bottom-left, q4 bottom-right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadrantLabels {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
}

/// A labeled coordinate in normalized `[0,1] x [0,1]` space.
///
/// Coordinates are clamped at construction; the fields are private so the
/// invariant cannot be broken after the fact.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String,
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_clamps_on_construction() {
        let p = Point::new("a", -0.5, 1.7);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 1.0);

        let q = Point::new("b", 0.25, 0.75);
        assert_eq!(q.x(), 0.25);
        assert_eq!(q.y(), 0.75);
    }

    #[test]
    fn default_model_has_placeholder_title() {
        let model = ChartModel::default();
        assert_eq!(model.title, "Quadrant Chart");
        assert!(model.points.is_empty());
        assert_eq!(model.x_axis.left, "");
        assert_eq!(model.quadrants.q4, "");
    }
}
