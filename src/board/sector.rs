//! One player's sector in its canonical frame.
//!
//! The frame is centred on the sector's symmetry axis with `y` growing towards
//! the outer board edge: the box grid spans `y ∈ [0, initial_y]` and
//! `x ∈ [initial_x, -initial_x]`, and the wedge apex (the board centre) sits at
//! `(0, -distance_from_center)`. A sector is always nine box widths wide
//! regardless of how many columns it has; `n_columns` only decides how the
//! width is ruled.

use crate::board::numbering::number_labels;
use crate::board::topology::{is_home_box, secure_boxes};
use crate::board::{BoardOptions, Palette, sector_color};
use crate::float_types::Real;
use crate::sketch::{Group, Path, Shape};
use crate::style::{Paint, Style};
use crate::traits::TransformOps;
use nalgebra::{Point2, Point3};

/// Derived dimensions shared by every sector of a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorGeometry {
    pub n_boxes_per_column: usize,
    pub n_columns: usize,
    pub n_players: usize,
    pub x_box_size: Real,
    pub y_box_size: Real,
    pub initial_x: Real,
    pub initial_y: Real,
    /// Degrees between consecutive sectors
    pub inc_angle_per_sector: Real,
    /// Tangent of the angle between the wedge's oblique edge and the X axis
    pub tan_angle: Real,
    /// Horizontal run of an oblique edge over one box height
    pub oblique_distance: Real,
    /// Width of the wedge's inner edge at `y = 0`
    pub top_distance: Real,
    pub distance_from_center: Real,
}

impl SectorGeometry {
    pub fn new(n_boxes_per_column: usize, n_columns: usize, size: Real, n_players: usize) -> Self {
        let x_box_size = size / 9.0;
        let y_box_size = size / (3.0 * (n_boxes_per_column as Real - 1.0));

        let initial_x = -x_box_size * n_columns as Real / 2.0;
        let initial_y = y_box_size * n_boxes_per_column as Real;

        let inc_angle_per_sector = 360.0 / n_players as Real;
        let angle = 90.0 - inc_angle_per_sector / 2.0;
        let tan_angle = angle.to_radians().tan();
        let oblique_distance = y_box_size / tan_angle;
        let top_distance = -2.0 * (initial_x + oblique_distance);
        let distance_from_center = tan_angle * (top_distance / 2.0);

        Self {
            n_boxes_per_column,
            n_columns,
            n_players,
            x_box_size,
            y_box_size,
            initial_x,
            initial_y,
            inc_angle_per_sector,
            tan_angle,
            oblique_distance,
            top_distance,
            distance_from_center,
        }
    }

    /// Top-left corner of box `(row, column)`; row 0 touches the outer edge.
    pub fn box_origin(&self, row: usize, column: usize) -> Point2<Real> {
        Point2::new(
            self.initial_x + column as Real * self.x_box_size,
            self.initial_y - (row as Real + 1.0) * self.y_box_size,
        )
    }

    pub fn box_center(&self, row: usize, column: usize) -> Point2<Real> {
        let origin = self.box_origin(row, column);
        Point2::new(origin.x + self.x_box_size / 2.0, origin.y + self.y_box_size / 2.0)
    }

    /// Boundary of the sector: the box grid plus the tapered strip towards the centre.
    pub fn outline(&self) -> Path {
        let (ix, iy, yb) = (self.initial_x, self.initial_y, self.y_box_size);
        Path::new()
            .move_by(ix, iy)
            .vertical_by(-iy + yb)
            .line_by(self.oblique_distance, -yb)
            .horizontal_by(self.top_distance)
            .line_by(self.oblique_distance, yb)
            .vertical_by(yb * (self.n_boxes_per_column as Real - 1.0))
            .close()
    }

    /// Home lane plus the exit column's box facing it.
    pub fn colored_part(&self) -> Path {
        let (xb, yb, iy) = (self.x_box_size, self.y_box_size, self.initial_y);
        Path::new()
            .move_by((self.n_columns as Real / 2.0 - 2.0) * xb, iy - yb)
            .vertical_by(-iy + yb)
            .horizontal_by(xb)
            .vertical_by(yb * (self.n_boxes_per_column as Real - 5.0))
            .horizontal_by(xb)
            .vertical_by(yb)
            .horizontal_by(-xb)
            .vertical_by(yb * 3.0)
            .close()
    }

    /// Triangle between the sector's inner edge and the board centre.
    pub fn center_part(&self) -> Path {
        let corner = self.initial_x + self.oblique_distance;
        Path::new()
            .move_by(corner, 0.0)
            .line_to(0.0, -self.distance_from_center)
            .line_to(-corner, 0.0)
    }

    /// Centre and radius of the home circle, which sits in the corner between this
    /// sector's exit column and the oblique edge of the next one.
    pub fn home_circle(&self) -> (Point2<Real>, Real) {
        let p1 = Point2::new(-self.initial_x, self.y_box_size);
        let p2 = Point2::new(
            (self.initial_y + self.distance_from_center) / self.tan_angle,
            self.initial_y,
        );
        let mid = Point2::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
        (mid, (mid.x - p1.x) * 0.9)
    }

    /// Radius of a secure-box marker.
    pub fn secure_circle_radius(&self) -> Real {
        self.y_box_size * 0.5 / 2.0
    }
}

/// Everything one sector's primitives depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorContext {
    pub geometry: SectorGeometry,
    /// 0-based sector index
    pub index: usize,
    pub color: Paint,
    pub palette: Palette,
    pub stroke_width: Real,
    pub font_size: Real,
    pub generate_center: bool,
    pub generate_numbers: bool,
}

impl SectorContext {
    pub fn new(geometry: SectorGeometry, index: usize, options: &BoardOptions) -> Self {
        Self {
            geometry,
            index,
            color: sector_color(index),
            palette: options.palette(),
            stroke_width: options.stroke_width,
            font_size: options.font_size(),
            generate_center: options.generate_center,
            generate_numbers: options.generate_numbers,
        }
    }

    /// 1-based number used in labels.
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    fn style(&self, fill: Paint) -> Style {
        Style::new(self.palette.sector_stroke, self.stroke_width, fill)
    }

    fn box_fill(&self, is_home_box: bool, other: Paint) -> Paint {
        self.palette.box_fill(is_home_box, self.color, other)
    }
}

pub fn outline(ctx: &SectorContext) -> Shape {
    let fill = ctx.box_fill(false, ctx.palette.regular_fill);
    Shape::path(ctx.geometry.outline(), ctx.style(fill), format!("outline-{}", ctx.number()))
}

pub fn colored_part(ctx: &SectorContext) -> Shape {
    Shape::path(
        ctx.geometry.colored_part(),
        ctx.style(ctx.color),
        format!("colored-part-{}", ctx.number()),
    )
}

pub fn center_part(ctx: &SectorContext) -> Shape {
    let fill = if !ctx.palette.laser && ctx.generate_center { ctx.color } else { Paint::None };
    Shape::path(ctx.geometry.center_part(), ctx.style(fill), format!("center-part-{}", ctx.number()))
}

pub fn horizontal_lines(ctx: &SectorContext) -> Group {
    let g = &ctx.geometry;
    let style = Style::stroke_only(ctx.palette.sector_stroke, ctx.stroke_width);
    let mut lines = Group::new(format!("hlines-{}", ctx.number()));
    for row in 1..g.n_boxes_per_column {
        let y = g.initial_y - g.y_box_size * row as Real;
        lines.add(Shape::line(
            g.initial_x,
            y,
            -g.initial_x,
            y,
            style,
            format!("hline-{}-{}", ctx.number(), row),
        ));
    }
    lines
}

pub fn vertical_lines(ctx: &SectorContext) -> Group {
    let g = &ctx.geometry;
    let style = Style::stroke_only(ctx.palette.sector_stroke, ctx.stroke_width);
    let mut lines = Group::new(format!("vlines-{}", ctx.number()));
    for column in 1..g.n_columns {
        let x = g.initial_x + g.x_box_size * column as Real;
        lines.add(Shape::line(
            x,
            g.initial_y,
            x,
            0.0,
            style,
            format!("vline-{}-{}", ctx.number(), column),
        ));
    }
    lines
}

pub fn secure_circles(ctx: &SectorContext) -> Group {
    let g = &ctx.geometry;
    let mut circles = Group::new(format!("secure-circles-{}", ctx.number()));
    for (row, column) in secure_boxes(g.n_columns) {
        let fill = ctx.box_fill(is_home_box(row, column, g.n_columns), ctx.palette.secure_fill);
        let center = g.box_center(row, column);
        circles.add(Shape::circle(
            center.x,
            center.y,
            g.secure_circle_radius(),
            ctx.style(fill),
            format!("secure-circle-{}-{}", ctx.number(), column),
        ));
    }
    circles
}

pub fn home_circle(ctx: &SectorContext) -> Shape {
    let (center, radius) = ctx.geometry.home_circle();
    let fill = ctx.box_fill(true, ctx.palette.secure_fill);
    Shape::circle(
        center.x,
        center.y,
        radius,
        ctx.style(fill),
        format!("homeCircle-{}", ctx.number()),
    )
}

pub fn numbers(ctx: &SectorContext) -> Group {
    let mut group = Group::new(format!("numbers-{}", ctx.number()));
    for label in number_labels(&ctx.geometry, ctx.index, ctx.font_size) {
        group.add(Shape::text(
            label.value.to_string(),
            label.position.x,
            label.position.y,
            ctx.font_size,
        ));
    }
    group
}

/// Every primitive of sector `ctx.index`, rotated into its seat around the
/// board centre (which ends up at the group's origin).
pub fn generate_sector(ctx: &SectorContext) -> Group {
    let g = &ctx.geometry;
    let mut sector = Group::new(format!("sector-{}", ctx.number()));

    sector.add(outline(ctx));
    if !ctx.palette.laser {
        sector.add(colored_part(ctx));
    }
    if ctx.generate_center {
        sector.add(center_part(ctx));
    }
    sector.add(horizontal_lines(ctx));
    sector.add(vertical_lines(ctx));
    sector.add(secure_circles(ctx));
    sector.add(home_circle(ctx));
    if ctx.generate_numbers {
        sector.add(numbers(ctx));
    }

    let angle = g.inc_angle_per_sector * ctx.index as Real;
    log::trace!("sector {} placed at {angle} degrees", ctx.number());
    sector
        .rotate_about(angle, Point3::new(0.0, -g.distance_from_center, 0.0))
        .translate(0.0, g.distance_from_center, 0.0)
}
