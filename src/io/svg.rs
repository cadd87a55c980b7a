//! SVG output for primitive trees.
//!
//! Groups become `<g>` elements carrying their transform as `matrix(...)`, and every
//! element gets an `inkscape:label` so the layer panel of a vector editor shows the
//! same names the generator used.

use crate::board::BoardOptions;
use crate::float_types::Real;
use crate::host::DocumentHost;
use crate::sketch::{Group, Node as SketchNode, Path, Shape, ShapeKind};
use nalgebra::Matrix3;
use std::convert::Infallible;
use svg::Document;
use svg::Node;
use svg::node::element::{Circle, Element, Group as SvgGroup, Path as SvgPath, Rectangle};

const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";

/// An SVG document that accepts primitive trees.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    document: Document,
}

impl SvgDocument {
    /// Empty document. `width`/`height` are physical sizes (e.g. `"40cm"`), the
    /// view box spans `view_width × view_height` user units.
    pub fn new(width: &str, height: &str, view_width: Real, view_height: Real) -> Self {
        let document = Document::new()
            .set("xmlns:inkscape", INKSCAPE_NS)
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {view_width} {view_height}"));
        Self { document }
    }

    /// Page sized to the board described by `options`.
    pub fn for_board(options: &BoardOptions) -> Self {
        let physical = format!("{}{}", options.board_size, options.units);
        let size = options.board_size_user_units();
        Self::new(&physical, &physical, size, size)
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        svg::save(path, &self.document)
    }
}

impl std::fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.document)
    }
}

impl DocumentHost for SvgDocument {
    type Error = Infallible;

    fn add_group(&mut self, group: &Group) -> Result<(), Self::Error> {
        self.document.append(group_element(group));
        Ok(())
    }
}

/// SVG `matrix(a b c d e f)` for a 2D homogeneous matrix.
pub fn matrix_attribute(m: &Matrix3<Real>) -> String {
    format!(
        "matrix({} {} {} {} {} {})",
        m[(0, 0)],
        m[(1, 0)],
        m[(0, 1)],
        m[(1, 1)],
        m[(0, 2)],
        m[(1, 2)]
    )
}

fn group_element(group: &Group) -> SvgGroup {
    let mut element = SvgGroup::new()
        .set("id", group.label.clone())
        .set("inkscape:label", group.label.clone());
    if !group.is_identity() {
        element = element.set("transform", matrix_attribute(&group.transform));
    }
    for child in &group.children {
        match child {
            SketchNode::Group(sub) => element.append(group_element(sub)),
            SketchNode::Shape(shape) => append_shape(&mut element, shape),
        }
    }
    element
}

fn append_shape(parent: &mut SvgGroup, shape: &Shape) {
    let style = shape.style.map(|s| s.to_css());
    let label = shape.label.clone();

    match &shape.kind {
        ShapeKind::Rectangle { origin, width, height } => {
            let mut rect = Rectangle::new()
                .set("x", origin.x)
                .set("y", origin.y)
                .set("width", *width)
                .set("height", *height)
                .set("inkscape:label", label);
            if let Some(style) = style {
                rect = rect.set("style", style);
            }
            parent.append(rect);
        },
        ShapeKind::Circle { center, radius } => {
            let mut circle = Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius)
                .set("inkscape:label", label);
            if let Some(style) = style {
                circle = circle.set("style", style);
            }
            parent.append(circle);
        },
        ShapeKind::Line { from, to } => {
            let data = Path::new().move_to(from.x, from.y).line_to(to.x, to.y);
            parent.append(path_element(&data, style, label));
        },
        ShapeKind::Path(data) => {
            parent.append(path_element(data, style, label));
        },
        ShapeKind::Text { anchor, content, font_size } => {
            let mut tspan = Element::new("tspan");
            tspan.append(svg::node::Text::new(content.clone()));

            let mut text = Element::new("text");
            text.assign("x", anchor.x);
            text.assign("y", anchor.y);
            text.assign("style", format!("font-size:{font_size}px;"));
            text.append(tspan);
            parent.append(text);
        },
    }
}

fn path_element(data: &Path, style: Option<String>, label: String) -> SvgPath {
    let mut path = SvgPath::new().set("d", data.to_string()).set("inkscape:label", label);
    if let Some(style) = style {
        path = path.set("style", style);
    }
    path
}

/// Render a primitive tree into a standalone SVG string of `size × size` user units.
pub fn to_svg_string(group: &Group, size: Real) -> String {
    let mut document = SvgDocument::new(&size.to_string(), &size.to_string(), size, size);
    let Ok(()) = document.add_group(group);
    document.to_string()
}
