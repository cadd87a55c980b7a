mod support;

use shapegen::board::{
    SectorGeometry, first_number, generate_board, number_labels, numbers_per_sector,
};
use support::{board_options, text_values};

/// Labels of every sector, concatenated from the highest index down to 0.
fn board_sequence(n_players: usize, n_columns: usize, n_boxes: usize) -> Vec<i64> {
    let geometry = SectorGeometry::new(n_boxes, n_columns, 1000.0, n_players);
    (0..n_players)
        .rev()
        .flat_map(|sector| number_labels(&geometry, sector, 20.0))
        .map(|label| label.value)
        .collect()
}

#[test]
fn numbers_cover_the_board_exactly_once() {
    for n_players in 3..=8 {
        for n_columns in 3..=5 {
            for n_boxes in [5, 8, 11] {
                let total = (numbers_per_sector(n_columns, n_boxes) * n_players) as i64;
                let mut values = board_sequence(n_players, n_columns, n_boxes);
                values.sort_unstable();
                let expected: Vec<i64> = (1..=total).collect();
                assert_eq!(values, expected, "{n_players} players, {n_columns}x{n_boxes}");
            }
        }
    }
}

#[test]
fn numbers_run_continuously_around_the_board() {
    for n_players in 3..=8 {
        for n_columns in 3..=5 {
            for n_boxes in [5, 8, 11] {
                let total = (numbers_per_sector(n_columns, n_boxes) * n_players) as i64;
                let values = board_sequence(n_players, n_columns, n_boxes);
                let wrap = [values[values.len() - 1], values[0]];
                let pairs = values.windows(2).chain(std::iter::once(&wrap[..]));
                for (i, pair) in pairs.enumerate() {
                    assert_eq!(
                        pair[1],
                        pair[0] % total + 1,
                        "break after label {i}: {n_players} players, {n_columns}x{n_boxes}"
                    );
                }
            }
        }
    }
}

#[test]
fn classic_board_starts() {
    let starts: Vec<i64> = (0..4).map(|s| first_number(s, 4, 3, 8)).collect();
    assert_eq!(starts, [60, 43, 26, 9]);
}

#[test]
fn every_sector_carries_the_same_amount_of_numbers() {
    let geometry = SectorGeometry::new(6, 4, 500.0, 5);
    for sector in 0..5 {
        assert_eq!(number_labels(&geometry, sector, 10.0).len(), numbers_per_sector(4, 6));
    }
}

#[test]
fn board_numbers_match_the_labels() {
    let options = board_options(4, 3, 8);
    let board = generate_board(&options).unwrap();
    let numbers = board.find_group("numbers-1").unwrap();
    let expected: Vec<i64> = (60..=68).chain(1..=8).collect();
    assert_eq!(text_values(numbers), expected);
}
