//! 2D primitive descriptors handed to a document host.

use crate::float_types::Real;
use crate::sketch::path::Path;
use crate::style::Style;
use geo::{BoundingRect, Coord, LineString, Rect};
use nalgebra::{Matrix3, Point2};

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rectangle { origin: Point2<Real>, width: Real, height: Real },
    Circle { center: Point2<Real>, radius: Real },
    Line { from: Point2<Real>, to: Point2<Real> },
    Path(Path),
    /// Text anchored at its baseline start.
    Text { anchor: Point2<Real>, content: String, font_size: Real },
}

/// An immutable primitive: geometry, optional style, and a human-readable label.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub style: Option<Style>,
    pub label: String,
}

impl Shape {
    pub fn rectangle(
        x: Real,
        y: Real,
        width: Real,
        height: Real,
        style: Style,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: ShapeKind::Rectangle { origin: Point2::new(x, y), width, height },
            style: Some(style),
            label: label.into(),
        }
    }

    pub fn circle(x: Real, y: Real, radius: Real, style: Style, label: impl Into<String>) -> Self {
        Self {
            kind: ShapeKind::Circle { center: Point2::new(x, y), radius },
            style: Some(style),
            label: label.into(),
        }
    }

    pub fn line(
        x1: Real,
        y1: Real,
        x2: Real,
        y2: Real,
        style: Style,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: ShapeKind::Line { from: Point2::new(x1, y1), to: Point2::new(x2, y2) },
            style: Some(style),
            label: label.into(),
        }
    }

    pub fn path(path: Path, style: Style, label: impl Into<String>) -> Self {
        Self { kind: ShapeKind::Path(path), style: Some(style), label: label.into() }
    }

    /// Unstyled text; only the font size is set.
    pub fn text(content: impl Into<String>, x: Real, y: Real, font_size: Real) -> Self {
        let content = content.into();
        Self {
            label: content.clone(),
            kind: ShapeKind::Text { anchor: Point2::new(x, y), content, font_size },
            style: None,
        }
    }

    /// Axis-aligned bounds of the geometry once `matrix` is applied.
    ///
    /// Stroke width is ignored. Text contributes its anchor only, since glyph
    /// metrics belong to whoever renders it.
    pub fn bounding_rect(&self, matrix: &Matrix3<Real>) -> Option<Rect<Real>> {
        let corners = |points: &[Point2<Real>]| -> Option<Rect<Real>> {
            let ls: LineString<Real> = points
                .iter()
                .map(|p| {
                    let q = matrix.transform_point(p);
                    Coord { x: q.x, y: q.y }
                })
                .collect();
            ls.bounding_rect()
        };

        match &self.kind {
            ShapeKind::Rectangle { origin, width, height } => corners(&[
                *origin,
                Point2::new(origin.x + width, origin.y),
                Point2::new(origin.x + width, origin.y + height),
                Point2::new(origin.x, origin.y + height),
            ]),
            ShapeKind::Circle { center, radius } => {
                // an affinely mapped circle is an ellipse; its half extents are the row norms
                let c = matrix.transform_point(center);
                let rx = radius.abs() * matrix[(0, 0)].hypot(matrix[(0, 1)]);
                let ry = radius.abs() * matrix[(1, 0)].hypot(matrix[(1, 1)]);
                Some(Rect::new(
                    Coord { x: c.x - rx, y: c.y - ry },
                    Coord { x: c.x + rx, y: c.y + ry },
                ))
            },
            ShapeKind::Line { from, to } => corners(&[*from, *to]),
            ShapeKind::Path(path) => corners(&path.points()),
            ShapeKind::Text { anchor, .. } => corners(&[*anchor]),
        }
    }
}

/// Smallest rectangle holding both inputs.
pub fn merge_rects(a: Option<Rect<Real>>, b: Option<Rect<Real>>) -> Option<Rect<Real>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(Rect::new(
            Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        )),
        (a, None) => a,
        (None, b) => b,
    }
}
