mod support;

use nalgebra::Point2;
use shapegen::{
    board::{
        BoardOptions, SectorContext, SectorGeometry, generate_board, generate_sector, sector_color,
        topology::{is_home_box, is_secure_box, secure_boxes},
    },
    sketch::{Group, ShapeKind},
    style::Paint,
};
use support::{approx_eq, board_options, child_groups, shapes};

fn sector(options: &BoardOptions, index: usize) -> Group {
    let geometry = SectorGeometry::new(
        options.n_boxes_per_column,
        options.n_columns,
        options.board_size_user_units(),
        options.n_players,
    );
    generate_sector(&SectorContext::new(geometry, index, options))
}

fn fill_of(group: &Group, label: &str) -> Option<Paint> {
    shapes(group)
        .into_iter()
        .find(|shape| shape.label == label)
        .and_then(|shape| shape.style)
        .map(|style| style.fill)
}

#[test]
fn outline_is_closed() {
    for n_players in 3..=8 {
        for n_columns in 3..=5 {
            for n_boxes in [5, 8, 12] {
                let path = SectorGeometry::new(n_boxes, n_columns, 900.0, n_players).outline();
                assert!(path.is_closed(), "{n_players} players, {n_columns}x{n_boxes}");
            }
        }
    }
}

#[test]
fn outline_follows_the_wedge() {
    let g = SectorGeometry::new(8, 3, 900.0, 4);
    let points = g.outline().points();
    assert!(approx_eq(points[0].x, g.initial_x, 1e-9));
    assert!(approx_eq(points[0].y, g.initial_y, 1e-9));
    // inner edge sits on y = 0 and is `top_distance` wide
    assert!(approx_eq(points[2].y, 0.0, 1e-9));
    assert!(approx_eq(points[3].x - points[2].x, g.top_distance, 1e-9));
    // symmetric about the sector axis
    assert!(approx_eq(points[2].x, -points[3].x, 1e-9));
    assert!(approx_eq(points[5].x, -g.initial_x, 1e-9));
    assert!(approx_eq(points[5].y, g.initial_y, 1e-9));
}

#[test]
fn four_player_wedge_is_a_right_angle() {
    let g = SectorGeometry::new(8, 3, 900.0, 4);
    assert!(approx_eq(g.inc_angle_per_sector, 90.0, 1e-12));
    assert!(approx_eq(g.tan_angle, 1.0, 1e-12));
    assert!(approx_eq(g.x_box_size, 100.0, 1e-12));
    assert!(approx_eq(g.y_box_size, 900.0 / 21.0, 1e-12));
}

#[test]
fn secure_predicate_marks_row_four_and_the_lane_entrance() {
    for n_columns in 3..=6 {
        let lane = n_columns - 2;
        for column in 0..n_columns {
            for row in 0..10 {
                let expected = if column == lane { row == 0 } else { row == 4 };
                assert_eq!(is_secure_box(row, column, n_columns), expected, "({row}, {column})");
            }
        }
        assert_eq!(secure_boxes(n_columns).len(), n_columns);
    }
}

#[test]
fn home_predicate_covers_the_lane_and_the_facing_box() {
    let n_columns = 4;
    assert!(!is_home_box(0, 2, n_columns));
    assert!((1..8).all(|row| is_home_box(row, 2, n_columns)));
    assert!(is_home_box(4, 3, n_columns));
    assert!(!is_home_box(3, 3, n_columns));
    assert!((0..8).all(|row| !is_home_box(row, 0, n_columns) && !is_home_box(row, 1, n_columns)));
}

#[test]
fn sector_children_in_drawing_order() {
    let options = BoardOptions::default();
    let group = sector(&options, 1);
    assert_eq!(group.label, "sector-2");

    let labels: Vec<&str> = group
        .children
        .iter()
        .map(|child| match child {
            shapegen::sketch::Node::Shape(s) => s.label.as_str(),
            shapegen::sketch::Node::Group(g) => g.label.as_str(),
        })
        .collect();
    assert_eq!(
        labels,
        [
            "outline-2",
            "colored-part-2",
            "center-part-2",
            "hlines-2",
            "vlines-2",
            "secure-circles-2",
            "homeCircle-2",
            "numbers-2",
        ]
    );
}

#[test]
fn grid_line_counts() {
    let options = board_options(5, 4, 9);
    let group = sector(&options, 0);
    let groups = child_groups(&group);
    let hlines = groups.iter().find(|g| g.label == "hlines-1").unwrap();
    let vlines = groups.iter().find(|g| g.label == "vlines-1").unwrap();
    assert_eq!(hlines.children.len(), 8);
    assert_eq!(vlines.children.len(), 3);
}

#[test]
fn one_secure_circle_per_column() {
    for n_columns in 3..=6 {
        let options = board_options(4, n_columns, 8);
        let group = sector(&options, 0);
        let circles = group.find_group("secure-circles-1").unwrap();
        assert_eq!(circles.children.len(), n_columns);
        let radius = SectorGeometry::new(8, n_columns, options.board_size_user_units(), 4)
            .secure_circle_radius();
        for shape in shapes(circles) {
            match shape.kind {
                ShapeKind::Circle { radius: r, .. } => assert!(approx_eq(r, radius, 1e-12)),
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}

#[test]
fn regular_mode_fills() {
    let options = BoardOptions::default();
    let index = 2;
    let color = sector_color(index);
    let group = sector(&options, index);

    assert_eq!(fill_of(&group, "outline-3"), Some(Paint::WHITE));
    assert_eq!(fill_of(&group, "colored-part-3"), Some(color));
    assert_eq!(fill_of(&group, "center-part-3"), Some(color));
    assert_eq!(fill_of(&group, "homeCircle-3"), Some(color));
    // track box, facing home box, lane entrance
    assert_eq!(fill_of(&group, "secure-circle-3-0"), Some(Paint::GRAY));
    assert_eq!(fill_of(&group, "secure-circle-3-2"), Some(color));
    assert_eq!(fill_of(&group, "secure-circle-3-1"), Some(Paint::GRAY));
}

#[test]
fn laser_mode_drops_fills_and_the_colored_part() {
    let options = BoardOptions { use_laser: true, ..BoardOptions::default() };
    let group = sector(&options, 0);

    assert!(group.find_shape("colored-part-1").is_none());
    for shape in shapes(&group) {
        let Some(style) = shape.style else { continue };
        assert_eq!(style.stroke, Paint::RED, "{}", shape.label);
        assert!(style.fill.is_none(), "{} filled in laser mode", shape.label);
    }
}

#[test]
fn optional_parts_can_be_left_out() {
    let options = BoardOptions {
        generate_center: false,
        generate_numbers: false,
        ..BoardOptions::default()
    };
    let group = sector(&options, 0);
    assert!(group.find_shape("center-part-1").is_none());
    assert!(group.find_group("numbers-1").is_none());
}

#[test]
fn every_sector_has_its_apex_at_the_board_centre() {
    for n_players in 3..=8 {
        let options = board_options(n_players, 3, 8);
        let g = SectorGeometry::new(8, 3, options.board_size_user_units(), n_players);
        let apex = Point2::new(0.0, -g.distance_from_center);
        for index in 0..n_players {
            let placed = sector(&options, index).transform.transform_point(&apex);
            assert!(placed.coords.norm() < 1e-9, "sector {index} of {n_players}: {placed}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let options = board_options(6, 3, 7);
    assert_eq!(generate_board(&options).unwrap(), generate_board(&options).unwrap());
}
