//! Which boxes of a sector are special.
//!
//! Every sector has the same fixed layout: columns `0..n_columns-2` are the shared
//! track, column `n_columns - 2` is the home lane (its row 0 is the lane's
//! entrance on the track), and column `n_columns - 1` is the track leading out of
//! the sector. Rows count from the outer board edge (`0`) towards the centre.
//! These predicates hard-code that one board variant; they are not meant to
//! describe any other topology.

/// Row holding the secure boxes of the track columns.
pub const SECURE_ROW: usize = 4;

/// Column index of the home lane.
#[inline]
pub const fn home_lane_column(n_columns: usize) -> usize {
    n_columns - 2
}

/// Column index of the outgoing track.
#[inline]
pub const fn exit_column(n_columns: usize) -> usize {
    n_columns - 1
}

/// A box belongs to the home area when it is in the home lane (past its entrance)
/// or is the exit column's box facing the lane's start.
#[inline]
pub const fn is_home_box(row: usize, column: usize, n_columns: usize) -> bool {
    let in_lane = column == home_lane_column(n_columns);
    let in_exit = column == exit_column(n_columns);
    (in_lane && row >= 1) || (in_exit && row == SECURE_ROW)
}

/// Safe squares: row 4 of every track column plus the home lane's entrance.
#[inline]
pub const fn is_secure_box(row: usize, column: usize, n_columns: usize) -> bool {
    let in_lane = column == home_lane_column(n_columns);
    (!in_lane && row == SECURE_ROW) || (in_lane && row == 0)
}

/// Candidate boxes for secure markers, in drawing order: row 4 across every
/// column, then the home lane entrance. Filtered through [`is_secure_box`].
pub fn secure_boxes(n_columns: usize) -> Vec<(usize, usize)> {
    (0..n_columns)
        .map(|column| (SECURE_ROW, column))
        .chain(std::iter::once((0, home_lane_column(n_columns))))
        .filter(|&(row, column)| is_secure_box(row, column, n_columns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_home_lane() {
        // three columns: 0 = track in, 1 = home lane, 2 = track out
        assert!(!is_home_box(0, 1, 3));
        assert!((1..8).all(|row| is_home_box(row, 1, 3)));
        assert!(is_home_box(4, 2, 3));
        assert!(!is_home_box(4, 0, 3));
    }

    #[test]
    fn secure_boxes_in_drawing_order() {
        assert_eq!(secure_boxes(3), vec![(4, 0), (4, 2), (0, 1)]);
        assert_eq!(secure_boxes(5), vec![(4, 0), (4, 1), (4, 2), (4, 4), (0, 3)]);
    }
}
