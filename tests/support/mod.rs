//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use geo::Rect;
use shapegen::{
    board::BoardOptions,
    float_types::Real,
    sketch::{Group, Node, Shape, ShapeKind},
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// `[min_x, min_y, max_x, max_y]` of a rectangle, for readable assertions.
pub fn rect_bounds(rect: &Rect<Real>) -> [Real; 4] {
    [rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

/// Checks that `rect` spans exactly `[lo, hi]` on both axes.
pub fn assert_rect_fills(rect: &Rect<Real>, lo: Real, hi: Real, eps: Real) {
    let [min_x, min_y, max_x, max_y] = rect_bounds(rect);
    assert!(approx_eq(min_x, lo, eps), "min x {min_x} != {lo}");
    assert!(approx_eq(min_y, lo, eps), "min y {min_y} != {lo}");
    assert!(approx_eq(max_x, hi, eps), "max x {max_x} != {hi}");
    assert!(approx_eq(max_y, hi, eps), "max y {max_y} != {hi}");
}

/// Every shape in the subtree, in document order.
pub fn shapes(group: &Group) -> Vec<Shape> {
    let mut out = Vec::new();
    group.visit_shapes(|shape, _| out.push(shape.clone()));
    out
}

/// Direct child groups of `group`.
pub fn child_groups(group: &Group) -> Vec<&Group> {
    group
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Group(g) => Some(g),
            Node::Shape(_) => None,
        })
        .collect()
}

/// Numbers written by a group of text shapes, in writing order.
pub fn text_values(group: &Group) -> Vec<i64> {
    shapes(group)
        .iter()
        .filter_map(|shape| match &shape.kind {
            ShapeKind::Text { content, .. } => content.parse().ok(),
            _ => None,
        })
        .collect()
}

/// Board options with the given player and column counts, everything else default.
pub fn board_options(n_players: usize, n_columns: usize, n_boxes_per_column: usize) -> BoardOptions {
    BoardOptions { n_players, n_columns, n_boxes_per_column, ..BoardOptions::default() }
}
