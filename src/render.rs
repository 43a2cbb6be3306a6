use crate::config::PageConfig;
use crate::layout::{Cell, CellGeometry, Layout};
use anyhow::Result;
use std::path::Path;

/// First cell id handed out after the two bootstrap cells (ids 0 and 1).
const FIRST_CELL_ID: u32 = 2;

/// A minimal owned XML element tree. The renderer builds the whole document
/// before serializing, so layout math and text emission stay separate.
#[derive(Debug, Clone)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Serialize with declaration and two-space indentation.
    pub fn serialize(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_xml(value));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }
        out.push_str(">\n");
        for child in &self.children {
            child.write_into(out, depth + 1);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }
}

/// Serialize a layout as a draw.io `mxfile` document.
///
/// Pure: the `timestamp` header field is the only per-invocation value and
/// is injected by the caller, so equal inputs yield byte-identical output.
pub fn render_drawio(layout: &Layout, page: &PageConfig, timestamp: &str) -> String {
    let mut root = XmlElement::new("root")
        .child(XmlElement::new("mxCell").attr("id", "0"))
        .child(XmlElement::new("mxCell").attr("id", "1").attr("parent", "0"));

    for (index, cell) in layout.cells.iter().enumerate() {
        root = root.child(cell_element(cell, FIRST_CELL_ID + index as u32));
    }

    let model = XmlElement::new("mxGraphModel")
        .attr("dx", "1000")
        .attr("dy", "1000")
        .attr("grid", if page.grid { "1" } else { "0" })
        .attr("gridSize", page.grid_size.to_string())
        .attr("guides", "1")
        .attr("tooltips", "1")
        .attr("connect", "1")
        .attr("arrows", "1")
        .attr("fold", "1")
        .attr("page", "1")
        .attr("pageScale", page.scale.to_string())
        .attr("pageWidth", page.width.to_string())
        .attr("pageHeight", page.height.to_string())
        .attr("math", "0")
        .attr("shadow", "0")
        .child(root);

    XmlElement::new("mxfile")
        .attr("host", "Electron")
        .attr("modified", timestamp)
        .attr("agent", "quadrant2drawio")
        .attr("type", "device")
        .child(XmlElement::new("diagram").attr("id", "quadrant-chart").child(model))
        .serialize()
}

fn cell_element(cell: &Cell, id: u32) -> XmlElement {
    let base = XmlElement::new("mxCell")
        .attr("id", id.to_string())
        .attr("value", cell.value.as_str())
        .attr("style", cell.style.as_str())
        .attr("parent", "1");

    match cell.geometry {
        CellGeometry::Vertex { x, y, width, height } => base.attr("vertex", "1").child(
            XmlElement::new("mxGeometry")
                .attr("x", fmt_coord(x))
                .attr("y", fmt_coord(y))
                .attr("width", fmt_coord(width))
                .attr("height", fmt_coord(height))
                .attr("as", "geometry"),
        ),
        CellGeometry::Edge { source, target } => base.attr("edge", "1").child(
            XmlElement::new("mxGeometry")
                .attr("relative", "1")
                .attr("as", "geometry")
                .child(
                    XmlElement::new("mxPoint")
                        .attr("x", fmt_coord(source.0))
                        .attr("y", fmt_coord(source.1))
                        .attr("as", "sourcePoint"),
                )
                .child(
                    XmlElement::new("mxPoint")
                        .attr("x", fmt_coord(target.0))
                        .attr("y", fmt_coord(target.1))
                        .attr("as", "targetPoint"),
                ),
        ),
    }
}

/// Format a coordinate without a trailing `.0` for whole values; fractional
/// values keep at most two decimals.
fn fmt_coord(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{value:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn write_output(xml: &str, output: &Path) -> Result<()> {
    std::fs::write(output, xml)?;
    Ok(())
}
