use crate::ir::{ChartModel, Point};
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy label group: the label runs up to the last colon before the
// bracket, so labels may themselves contain colons.
static POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+):\s*\[\s*(-?[0-9]*\.?[0-9]+)\s*,\s*(-?[0-9]*\.?[0-9]+)\s*\]").unwrap()
});

/// Parse quadrant-chart notation into a [`ChartModel`].
///
/// Tolerant by design: this never fails. Lines that match no directive and
/// point lines whose bracket contents do not parse as two numbers are
/// dropped silently, yielding a best-effort partial model. Out-of-range
/// coordinates are clamped into `[0,1]`, never rejected.
///
/// Each line is matched against the directives in a fixed order and the
/// first match wins; a line matches at most one directive.
pub fn parse(input: &str) -> ChartModel {
    let mut model = ChartModel::default();

    for raw_line in input.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("%%") {
            continue;
        }
        if line.starts_with("quadrantChart") {
            continue;
        }
        if let Some(rest) = line.strip_prefix("title") {
            model.title = rest.trim().to_string();
            continue;
        }
        if let Some(rest) = line.strip_prefix("x-axis") {
            if let Some((left, right)) = split_axis(rest) {
                model.x_axis.left = left;
                model.x_axis.right = right;
            }
            continue;
        }
        if let Some(rest) = line.strip_prefix("y-axis") {
            // Notation order is bottom-then-top.
            if let Some((bottom, top)) = split_axis(rest) {
                model.y_axis.bottom = bottom;
                model.y_axis.top = top;
            }
            continue;
        }
        // Plain prefix matches, deliberately unanchored: a line starting
        // with `quadrant-10` is captured by the quadrant-1 arm. Inherited
        // quirk, kept as-is.
        if let Some(rest) = line.strip_prefix("quadrant-1") {
            model.quadrants.q1 = rest.trim().to_string();
            continue;
        }
        if let Some(rest) = line.strip_prefix("quadrant-2") {
            model.quadrants.q2 = rest.trim().to_string();
            continue;
        }
        if let Some(rest) = line.strip_prefix("quadrant-3") {
            model.quadrants.q3 = rest.trim().to_string();
            continue;
        }
        if let Some(rest) = line.strip_prefix("quadrant-4") {
            model.quadrants.q4 = rest.trim().to_string();
            continue;
        }
        if let Some(point) = parse_point_line(line) {
            model.points.push(point);
        }
    }

    model
}

/// Split an axis directive body on `-->`. The directive is ignored unless
/// the separator yields exactly two parts, so a body with zero or two
/// separators leaves the axis at its prior value.
fn split_axis(rest: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = rest.split("-->").collect();
    match parts.as_slice() {
        [left, right] => Some((left.trim().to_string(), right.trim().to_string())),
        _ => None,
    }
}

fn parse_point_line(line: &str) -> Option<Point> {
    let caps = POINT_RE.captures(line)?;
    let label = caps[1].trim().to_string();
    let x: f64 = caps[2].parse().ok()?;
    let y: f64 = caps[3].parse().ok()?;
    Some(Point::new(label, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_input_yields_defaults() {
        let model = parse("");
        assert_eq!(model, ChartModel::default());
    }

    #[test]
    fn parse_basic_chart() {
        let input = "\
title My Chart
x-axis Low --> High
y-axis Weak --> Strong
quadrant-1 Stars
Alpha: [0.8, 0.9]
";
        let model = parse(input);
        assert_eq!(model.title, "My Chart");
        assert_eq!(model.x_axis.left, "Low");
        assert_eq!(model.x_axis.right, "High");
        assert_eq!(model.y_axis.bottom, "Weak");
        assert_eq!(model.y_axis.top, "Strong");
        assert_eq!(model.quadrants.q1, "Stars");
        assert_eq!(model.points.len(), 1);
        assert_eq!(model.points[0].label, "Alpha");
        assert_eq!(model.points[0].x(), 0.8);
        assert_eq!(model.points[0].y(), 0.9);
    }

    #[test]
    fn unrecognized_lines_are_dropped() {
        let model = parse("foo bar baz");
        assert_eq!(model, ChartModel::default());
    }

    #[test]
    fn header_and_comment_lines_are_skipped() {
        let model = parse("quadrantChart\n%% a comment\n  %% indented comment\nA: [0.2, 0.3]");
        assert_eq!(model.title, "Quadrant Chart");
        assert_eq!(model.points.len(), 1);
    }

    #[test]
    fn last_title_wins() {
        let model = parse("title First\ntitle Second");
        assert_eq!(model.title, "Second");
    }

    #[test]
    fn axis_without_separator_is_ignored() {
        let model = parse("x-axis Low High\ny-axis Weak --> Mid --> Strong");
        assert_eq!(model.x_axis.left, "");
        assert_eq!(model.x_axis.right, "");
        assert_eq!(model.y_axis.bottom, "");
        assert_eq!(model.y_axis.top, "");
    }

    #[test]
    fn out_of_range_coordinates_are_clamped() {
        let model = parse("High: [1.5, 2.0]\nLow: [-0.3, -1]");
        assert_eq!(model.points.len(), 2);
        assert_eq!(model.points[0].x(), 1.0);
        assert_eq!(model.points[0].y(), 1.0);
        assert_eq!(model.points[1].x(), 0.0);
        assert_eq!(model.points[1].y(), 0.0);
    }

    #[test]
    fn malformed_point_is_dropped() {
        let model = parse("Beta: [abc, 0.5]\nGamma: [0.5]\nDelta: 0.5, 0.5");
        assert!(model.points.is_empty());
    }

    #[test]
    fn point_label_runs_to_last_colon() {
        let model = parse("Release: phase 2: [0.4, 0.6]");
        assert_eq!(model.points.len(), 1);
        assert_eq!(model.points[0].label, "Release: phase 2");
    }

    #[test]
    fn points_preserve_source_order() {
        let model = parse("B: [0.1, 0.1]\nA: [0.9, 0.9]\nC: [0.5, 0.5]");
        let labels: Vec<&str> = model.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["B", "A", "C"]);
    }

    #[test]
    fn quadrant_prefix_collision_is_preserved() {
        // `quadrant-10` is consumed by the quadrant-1 arm; the stray "0"
        // becomes part of the label. Inherited behavior, asserted so a
        // change is a deliberate one.
        let model = parse("quadrant-10 Leaders");
        assert_eq!(model.quadrants.q1, "0 Leaders");
    }

    #[test]
    fn all_quadrant_labels_assigned() {
        let model = parse("quadrant-1 A\nquadrant-2 B\nquadrant-3 C\nquadrant-4 D");
        assert_eq!(model.quadrants.q1, "A");
        assert_eq!(model.quadrants.q2, "B");
        assert_eq!(model.quadrants.q3, "C");
        assert_eq!(model.quadrants.q4, "D");
    }

    #[test]
    fn directive_content_round_trips_verbatim() {
        let model = parse("title MiXeD CaSe  \nx-axis  a b  -->  c d ");
        assert_eq!(model.title, "MiXeD CaSe");
        assert_eq!(model.x_axis.left, "a b");
        assert_eq!(model.x_axis.right, "c d");
    }
}
