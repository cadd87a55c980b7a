//! Trees of 2D primitives: the pure description layer the board generator
//! produces and document hosts consume.

use crate::float_types::Real;
use crate::traits::TransformOps;
use geo::Rect;
use nalgebra::{Matrix3, Matrix4};

pub mod path;
pub mod shapes;

pub use path::{Path, PathCommand};
pub use shapes::{Shape, ShapeKind, merge_rects};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Shape(Shape),
    Group(Group),
}

impl From<Shape> for Node {
    fn from(shape: Shape) -> Self {
        Node::Shape(shape)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// An ordered collection of primitives and subgroups sharing one affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    /// Maps the children's coordinates into the parent's frame.
    pub transform: Matrix3<Real>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), transform: Matrix3::identity(), children: Vec::new() }
    }

    /// Append a child; later children stack above earlier ones.
    pub fn add(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Builder flavour of [`Group::add`].
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.add(node);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.transform == Matrix3::identity()
    }

    /// Bounds of every descendant in the parent's frame, i.e. with this group's
    /// transform applied.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.bounding_rect_in(&Matrix3::identity())
    }

    fn bounding_rect_in(&self, parent: &Matrix3<Real>) -> Option<Rect<Real>> {
        let world = parent * self.transform;
        self.children.iter().fold(None, |acc, child| {
            let rect = match child {
                Node::Shape(shape) => shape.bounding_rect(&world),
                Node::Group(group) => group.bounding_rect_in(&world),
            };
            merge_rects(acc, rect)
        })
    }

    /// Visit every shape together with the transform that maps it into this
    /// group's parent frame, in document order.
    pub fn visit_shapes<F>(&self, mut f: F)
    where
        F: FnMut(&Shape, &Matrix3<Real>),
    {
        self.visit_shapes_in(&Matrix3::identity(), &mut f);
    }

    fn visit_shapes_in<F>(&self, parent: &Matrix3<Real>, f: &mut F)
    where
        F: FnMut(&Shape, &Matrix3<Real>),
    {
        let world = parent * self.transform;
        for child in &self.children {
            match child {
                Node::Shape(shape) => f(shape, &world),
                Node::Group(group) => group.visit_shapes_in(&world, f),
            }
        }
    }

    /// Depth-first search for a descendant group (or self) by label.
    pub fn find_group(&self, label: &str) -> Option<&Group> {
        if self.label == label {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Group(group) => group.find_group(label),
            Node::Shape(_) => None,
        })
    }

    /// Direct child shape by label.
    pub fn find_shape(&self, label: &str) -> Option<&Shape> {
        self.children.iter().find_map(|child| match child {
            Node::Shape(shape) if shape.label == label => Some(shape),
            _ => None,
        })
    }

    /// Number of shapes in the whole subtree.
    pub fn shape_count(&self) -> usize {
        let mut count = 0;
        self.visit_shapes(|_, _| count += 1);
        count
    }
}

impl TransformOps for Group {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        // XY block of the 3D affine; Z is dropped
        let m2 = Matrix3::new(
            matrix[(0, 0)], matrix[(0, 1)], matrix[(0, 3)],
            matrix[(1, 0)], matrix[(1, 1)], matrix[(1, 3)],
            0.0, 0.0, 1.0,
        );
        let mut group = self.clone();
        group.transform = m2 * self.transform;
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Paint, Style};
    use nalgebra::Point3;

    fn unit_square() -> Shape {
        Shape::rectangle(0.0, 0.0, 1.0, 1.0, Style::stroke_only(Paint::BLACK, 0.1), "sq")
    }

    #[test]
    fn bounds_follow_nested_transforms() {
        let inner = Group::new("inner").with(unit_square()).translate(2.0, 0.0, 0.0);
        let outer = Group::new("outer").with(inner).scale(2.0, 3.0, 1.0);

        let rect = outer.bounding_rect().unwrap();
        assert!((rect.min().x - 4.0).abs() < 1e-9);
        assert!((rect.max().x - 6.0).abs() < 1e-9);
        assert!((rect.max().y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn rotated_circle_keeps_radius() {
        let circle = Shape::circle(1.0, 0.0, 0.5, Style::stroke_only(Paint::BLACK, 0.1), "c");
        let group = Group::new("g").with(circle).rotate_about(90.0, Point3::origin());
        let rect = group.bounding_rect().unwrap();
        assert!((rect.width() - 1.0).abs() < 1e-9);
        assert!((rect.center().y - 1.0).abs() < 1e-9);
        assert!(rect.center().x.abs() < 1e-9);
    }

    #[test]
    fn lookup_by_label() {
        let group = Group::new("root").with(Group::new("child").with(unit_square()));
        assert!(group.find_group("child").is_some());
        assert!(group.find_group("child").unwrap().find_shape("sq").is_some());
        assert_eq!(group.shape_count(), 1);
    }
}
