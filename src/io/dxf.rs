//! DXF output for laser cutters and CAD tools.
//!
//! DXF has no groups or fills, so the primitive tree is flattened: every shape is
//! moved into board coordinates and emitted as plain `LINE`, `CIRCLE` and `TEXT`
//! entities. DXF's Y axis points up, so `y` is mirrored about the board height.

use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::{Group, Path, ShapeKind};
use dxf::Drawing;
use dxf::entities::{Circle, Entity, EntityType, Line, Text};
use nalgebra::{Matrix3, Point2};

struct Flip {
    height: Real,
}

impl Flip {
    #[allow(clippy::unnecessary_cast)]
    fn point(&self, p: Point2<Real>) -> dxf::Point {
        dxf::Point::new(p.x as f64, (self.height - p.y) as f64, 0.0)
    }
}

fn add_segments(drawing: &mut Drawing, flip: &Flip, path: &Path) {
    for (from, to) in path.segments() {
        let line = Line::new(flip.point(from), flip.point(to));
        drawing.add_entity(Entity::new(EntityType::Line(line)));
    }
}

/// Flatten `group` into a DXF drawing whose page is `height` user units tall.
#[allow(clippy::unnecessary_cast)]
pub fn to_dxf(group: &Group, height: Real) -> Result<Vec<u8>, IoError> {
    let mut drawing = Drawing::new();
    let flip = Flip { height };
    let mut count = 0usize;

    group.visit_shapes(|shape, matrix: &Matrix3<Real>| {
        // lengths scale by the mean linear factor of the transform
        let det = matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)];
        let length_scale = det.abs().sqrt();
        count += 1;

        match &shape.kind {
            ShapeKind::Rectangle { origin, width, height } => {
                let outline = Path::new()
                    .move_to(origin.x, origin.y)
                    .horizontal_by(*width)
                    .vertical_by(*height)
                    .horizontal_by(-width)
                    .close();
                add_segments(&mut drawing, &flip, &outline.transformed(matrix));
            },
            ShapeKind::Line { from, to } => {
                let line = Path::new().move_to(from.x, from.y).line_to(to.x, to.y);
                add_segments(&mut drawing, &flip, &line.transformed(matrix));
            },
            ShapeKind::Path(path) => {
                add_segments(&mut drawing, &flip, &path.transformed(matrix));
            },
            ShapeKind::Circle { center, radius } => {
                let circle = Circle::new(
                    flip.point(matrix.transform_point(center)),
                    (radius * length_scale) as f64,
                );
                drawing.add_entity(Entity::new(EntityType::Circle(circle)));
            },
            ShapeKind::Text { anchor, content, font_size } => {
                let text = Text {
                    location: flip.point(matrix.transform_point(anchor)),
                    text_height: (font_size * length_scale) as f64,
                    value: content.clone(),
                    ..Default::default()
                };
                drawing.add_entity(Entity::new(EntityType::Text(text)));
            },
        }
    });

    log::debug!("flattened {count} shapes into DXF entities");
    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

impl Group {
    /// See [`to_dxf`].
    pub fn to_dxf(&self, height: Real) -> Result<Vec<u8>, IoError> {
        self::to_dxf(self, height)
    }
}
