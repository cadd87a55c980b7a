//! Track numbering.
//!
//! Boxes are numbered continuously around the whole board. Within a sector the
//! count snakes through the columns, alternating direction, except for the home
//! lane column which only holds one number (its entrance box on the track).
//! Sectors are numbered in descending index order so that the sequence runs on
//! from sector `s` into sector `s - 1`; sector 0 carries the highest numbers and
//! wraps back to 1 after its home lane entrance.

use crate::board::sector::SectorGeometry;
use crate::board::topology::{exit_column, home_lane_column};
use crate::float_types::Real;
use nalgebra::Point2;

/// A number and where its text baseline starts, in the sector's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberLabel {
    pub value: i64,
    pub column: usize,
    pub position: Point2<Real>,
}

/// How many numbers each sector carries: every track column in full plus the
/// home lane entrance.
pub const fn numbers_per_sector(n_columns: usize, n_boxes_per_column: usize) -> usize {
    (n_columns - 1) * n_boxes_per_column + 1
}

/// First number written in sector `sector`.
///
/// Sector 0 runs up to the last number of the board at its home lane entrance and
/// restarts at 1 in the exit column, so the highest sector starts right after
/// that column's `n_boxes_per_column` numbers.
///
/// ```
/// # use shapegen::board::first_number;
/// // classic four-player board, 3 columns of 8 boxes: 17 numbers per sector
/// assert_eq!(first_number(0, 4, 3, 8), 60);
/// assert_eq!(first_number(3, 4, 3, 8), 9);
/// // two track columns before the lane
/// assert_eq!(first_number(0, 4, 4, 8), 84);
/// ```
pub fn first_number(sector: usize, n_players: usize, n_columns: usize, n_boxes_per_column: usize) -> i64 {
    let per_sector = numbers_per_sector(n_columns, n_boxes_per_column) as i64;
    let before_lane = ((n_columns - 2) * n_boxes_per_column) as i64;
    let first = per_sector * (n_players as i64 - sector as i64) - before_lane;
    // end of the board reached inside the first column
    if first <= 0 { first + per_sector } else { first }
}

/// Every number of sector `sector`, in writing order.
pub fn number_labels(geometry: &SectorGeometry, sector: usize, font_size: Real) -> Vec<NumberLabel> {
    let g = geometry;
    let n_columns = g.n_columns;
    let n_boxes = g.n_boxes_per_column;

    let x_offset = g.x_box_size / 5.0;
    let y_offset = (g.y_box_size - font_size) / 2.0;

    let mut x = g.x_box_size / 2.0 - g.x_box_size * (n_columns as Real / 2.0) + x_offset;
    let mut y = g.y_box_size - y_offset;

    let mut number = first_number(sector, g.n_players, n_columns, n_boxes);
    // +1 counts towards the outer edge, -1 towards the centre
    let mut direction: Real = 1.0;
    let mut labels = Vec::with_capacity(numbers_per_sector(n_columns, n_boxes));

    for column in 0..n_columns {
        let home_lane = column == home_lane_column(n_columns);

        // the exit column is left aligned
        if column == exit_column(n_columns) {
            x -= g.x_box_size / 2.0 + x_offset / 2.0;
        }

        for row in 0..n_boxes {
            labels.push(NumberLabel { value: number, column, position: Point2::new(x, y) });
            number += 1;

            // the last box of a column shares its y with the next column's first
            if row != n_boxes - 1 {
                y += direction * g.y_box_size;
            }

            if home_lane {
                // one number only: undo the step and let the next column run the same way
                direction = -direction;
                y += direction * g.y_box_size;
                if sector == 0 {
                    number = 1;
                }
                break;
            }
        }

        direction = -direction;
        x += g.x_box_size;
    }

    labels
}
