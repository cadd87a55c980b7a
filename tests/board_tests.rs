mod support;

use shapegen::{
    board::{BoardOptions, emit_board, generate_board, generate_sectors},
    errors::ValidationError,
    host::{DocumentHost, HostError},
    sketch::{Group, ShapeKind},
    style::Paint,
    units::Units,
};
use support::{approx_eq, assert_rect_fills, board_options};

#[test]
fn sectors_fill_the_board_inside_the_margin() {
    let configs = [
        board_options(3, 3, 8),
        board_options(4, 3, 8),
        board_options(5, 4, 6),
        board_options(6, 3, 7),
        board_options(8, 5, 12),
        BoardOptions { units: Units::In, board_size: 12.0, board_margin: 0.5, ..BoardOptions::default() },
        BoardOptions { units: Units::Px, board_size: 500.0, board_margin: 0.0, ..BoardOptions::default() },
        BoardOptions { use_laser: true, generate_numbers: false, ..BoardOptions::default() },
    ];

    for options in configs {
        let size = options.board_size_user_units();
        let margin = options.board_margin_user_units();
        let sectors = generate_sectors(&options).unwrap();
        let bounds = sectors.bounding_rect().unwrap();
        assert_rect_fills(&bounds, margin, size - margin, 1e-6);
    }
}

#[test]
fn board_is_border_then_sectors() {
    let options = BoardOptions::default();
    let board = generate_board(&options).unwrap();
    assert_eq!(board.label, "board");
    assert_eq!(board.children.len(), 2);

    let border = board.find_shape("border").unwrap();
    let size = options.board_size_user_units();
    match border.kind {
        ShapeKind::Rectangle { origin, width, height } => {
            assert_eq!((origin.x, origin.y), (0.0, 0.0));
            assert!(approx_eq(width, size, 1e-9));
            assert!(approx_eq(height, size, 1e-9));
        },
        ref other => panic!("border is {other:?}"),
    }
    let style = border.style.unwrap();
    assert_eq!(style.stroke, Paint::GRAY);
    assert_eq!(style.fill, Paint::WHITE);

    let sectors = board.find_group("sectors").unwrap();
    let labels: Vec<String> = support::child_groups(sectors).iter().map(|g| g.label.clone()).collect();
    assert_eq!(labels, ["sector-1", "sector-2", "sector-3", "sector-4"]);
}

#[test]
fn board_in_centimetres_is_sized_at_96_dpi() {
    let options = BoardOptions { board_size: 2.54, board_margin: 0.254, ..BoardOptions::default() };
    assert!(approx_eq(options.board_size_user_units(), 96.0, 1e-9));
    assert!(approx_eq(options.board_margin_user_units(), 9.6, 1e-9));
}

#[test]
fn laser_border_is_black_and_empty() {
    let options = BoardOptions {
        use_laser: true,
        fill_color: Paint::Rgb([1, 2, 3]),
        ..BoardOptions::default()
    };
    let board = generate_board(&options).unwrap();
    let style = board.find_shape("border").unwrap().style.unwrap();
    assert_eq!(style.stroke, Paint::BLACK);
    assert_eq!(style.fill, Paint::None);
}

#[test]
fn border_takes_the_picker_colour() {
    let options = BoardOptions { fill_color: Paint::from_rgba_int(0x336699ff), ..BoardOptions::default() };
    let board = generate_board(&options).unwrap();
    let style = board.find_shape("border").unwrap().style.unwrap();
    assert_eq!(style.fill.to_string(), "#336699");
}

#[test]
fn invalid_options_are_rejected() {
    let cases = [
        (board_options(4, 3, 4), ValidationError::TooFewBoxesPerColumn(4)),
        (board_options(4, 2, 8), ValidationError::TooFewColumns(2)),
        (board_options(2, 3, 8), ValidationError::PlayerCount { got: 2, min: 3, max: 8 }),
        (board_options(9, 3, 8), ValidationError::PlayerCount { got: 9, min: 3, max: 8 }),
        (
            BoardOptions { board_margin: 20.0, ..BoardOptions::default() },
            ValidationError::MarginTooLarge { margin: 20.0, board_size: 40.0 },
        ),
        (
            BoardOptions { board_size: 0.0, ..BoardOptions::default() },
            ValidationError::NonPositive { name: "board size", value: 0.0 },
        ),
        (
            BoardOptions { board_margin: -1.0, ..BoardOptions::default() },
            ValidationError::Negative { name: "board margin", value: -1.0 },
        ),
    ];

    for (options, expected) in cases {
        assert_eq!(generate_board(&options), Err(expected.clone()));
        assert_eq!(generate_sectors(&options), Err(expected));
    }
}

/// Collects the labels of every group it is handed.
#[derive(Default)]
struct Recorder {
    groups: Vec<String>,
}

impl DocumentHost for Recorder {
    type Error = std::convert::Infallible;

    fn add_group(&mut self, group: &Group) -> Result<(), Self::Error> {
        self.groups.push(group.label.clone());
        Ok(())
    }
}

#[test]
fn emit_hands_the_board_to_the_host() {
    let mut host = Recorder::default();
    let board = emit_board(&mut host, &BoardOptions::default()).unwrap();
    assert_eq!(host.groups, ["board"]);
    assert_eq!(board, generate_board(&BoardOptions::default()).unwrap());
}

#[test]
fn emit_does_not_touch_the_host_on_bad_options() {
    let mut host = Recorder::default();
    let result = emit_board(&mut host, &board_options(1, 3, 8));
    assert!(matches!(result, Err(HostError::Validation(ValidationError::PlayerCount { .. }))));
    assert!(host.groups.is_empty());
}
