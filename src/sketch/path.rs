//! Straight-segment SVG path model.
//!
//! Only the commands the board needs are modelled: `M`/`m`, `L`/`l`, `H`/`h`,
//! `V`/`v` and `Z`. Coordinates are evaluated the way an SVG renderer does, so a
//! path can be asked for its vertices, its end point, or its segments without
//! going through a renderer.

use crate::float_types::{Real, tolerance};
use nalgebra::{Matrix3, Point2, Vector2};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { to: Point2<Real>, relative: bool },
    LineTo { to: Point2<Real>, relative: bool },
    Horizontal { x: Real, relative: bool },
    Vertical { y: Real, relative: bool },
    Close,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub const fn new() -> Self {
        Self { commands: Vec::new() }
    }

    fn push(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn move_to(self, x: Real, y: Real) -> Self {
        self.push(PathCommand::MoveTo { to: Point2::new(x, y), relative: false })
    }

    pub fn move_by(self, dx: Real, dy: Real) -> Self {
        self.push(PathCommand::MoveTo { to: Point2::new(dx, dy), relative: true })
    }

    pub fn line_to(self, x: Real, y: Real) -> Self {
        self.push(PathCommand::LineTo { to: Point2::new(x, y), relative: false })
    }

    pub fn line_by(self, dx: Real, dy: Real) -> Self {
        self.push(PathCommand::LineTo { to: Point2::new(dx, dy), relative: true })
    }

    pub fn horizontal_by(self, dx: Real) -> Self {
        self.push(PathCommand::Horizontal { x: dx, relative: true })
    }

    pub fn vertical_by(self, dy: Real) -> Self {
        self.push(PathCommand::Vertical { y: dy, relative: true })
    }

    pub fn close(self) -> Self {
        self.push(PathCommand::Close)
    }

    /// Walk the commands, calling `f(previous, current, pen_down)` after each one.
    fn walk<F>(&self, mut f: F)
    where
        F: FnMut(Point2<Real>, Point2<Real>, bool),
    {
        let mut current = Point2::origin();
        let mut subpath_start = current;

        for command in &self.commands {
            let previous = current;
            let pen_down = match *command {
                PathCommand::MoveTo { to, relative } => {
                    current = if relative { current + to.coords } else { to };
                    subpath_start = current;
                    false
                },
                PathCommand::LineTo { to, relative } => {
                    current = if relative { current + to.coords } else { to };
                    true
                },
                PathCommand::Horizontal { x, relative } => {
                    current.x = if relative { current.x + x } else { x };
                    true
                },
                PathCommand::Vertical { y, relative } => {
                    current.y = if relative { current.y + y } else { y };
                    true
                },
                PathCommand::Close => {
                    current = subpath_start;
                    true
                },
            };
            f(previous, current, pen_down);
        }
    }

    /// Absolute position of the pen after every command, in order.
    pub fn points(&self) -> Vec<Point2<Real>> {
        let mut points = Vec::with_capacity(self.commands.len());
        self.walk(|_, current, _| points.push(current));
        points
    }

    /// Straight segments actually drawn by the path, closing segments included.
    pub fn segments(&self) -> Vec<(Point2<Real>, Point2<Real>)> {
        let mut segments = Vec::new();
        self.walk(|from, to, pen_down| {
            if pen_down && from != to {
                segments.push((from, to));
            }
        });
        segments
    }

    pub fn start(&self) -> Option<Point2<Real>> {
        self.points().first().copied()
    }

    /// Pen position once every command has run.
    pub fn end(&self) -> Option<Point2<Real>> {
        self.points().last().copied()
    }

    /// True when the path ends with `Z` and the pen is back where it started.
    pub fn is_closed(&self) -> bool {
        let (Some(start), Some(end)) = (self.start(), self.end()) else {
            return false;
        };
        matches!(self.commands.last(), Some(PathCommand::Close))
            && (end - start).norm() <= tolerance()
    }

    /// Bake a 2D affine transform into absolute coordinates.
    pub fn transformed(&self, matrix: &Matrix3<Real>) -> Path {
        let mut out = Path::new();
        let mut first = true;
        self.walk(|_, current, pen_down| {
            let p = matrix.transform_point(&current);
            if first || !pen_down {
                out.commands.push(PathCommand::MoveTo { to: p, relative: false });
                first = false;
            } else {
                out.commands.push(PathCommand::LineTo { to: p, relative: false });
            }
        });
        if matches!(self.commands.last(), Some(PathCommand::Close)) {
            out.commands.pop();
            out.commands.push(PathCommand::Close);
        }
        out
    }
}

fn write_pair(f: &mut fmt::Formatter<'_>, letter: char, v: Vector2<Real>) -> fmt::Result {
    write!(f, "{letter} {} {}", v.x, v.y)
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { to, relative } => {
                write_pair(f, if relative { 'm' } else { 'M' }, to.coords)
            },
            PathCommand::LineTo { to, relative } => {
                write_pair(f, if relative { 'l' } else { 'L' }, to.coords)
            },
            PathCommand::Horizontal { x, relative } => {
                write!(f, "{} {x}", if relative { 'h' } else { 'H' })
            },
            PathCommand::Vertical { y, relative } => {
                write!(f, "{} {y}", if relative { 'v' } else { 'V' })
            },
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Renders SVG path data, e.g. `m 0 0 v 10 h 5 Z`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_commands_accumulate() {
        let path = Path::new().move_by(1.0, 2.0).vertical_by(3.0).horizontal_by(-4.0).close();
        assert_eq!(
            path.points(),
            vec![
                Point2::new(1.0, 2.0),
                Point2::new(1.0, 5.0),
                Point2::new(-3.0, 5.0),
                Point2::new(1.0, 2.0),
            ]
        );
        assert!(path.is_closed());
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.to_string(), "m 1 2 v 3 h -4 Z");
    }

    #[test]
    fn open_path_is_not_closed() {
        let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 0.0).line_to(0.0, 1.0);
        assert!(!path.is_closed());
        assert_eq!(path.end(), Some(Point2::new(0.0, 1.0)));
    }

    #[test]
    fn transformed_path_keeps_shape() {
        let path = Path::new().move_by(0.0, 0.0).horizontal_by(2.0).vertical_by(2.0).close();
        let m = Matrix3::new_translation(&Vector2::new(10.0, -1.0));
        let moved = path.transformed(&m);
        assert_eq!(moved.points()[2], Point2::new(12.0, 1.0));
        assert!(moved.is_closed());
    }
}
