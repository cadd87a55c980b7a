//! Validation errors

use crate::float_types::Real;

/// All the parameter issues a generator may reject before producing geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Row 4 carries the secure boxes, so a column needs at least five boxes
    #[error("(TooFewBoxesPerColumn) a column needs at least 5 boxes, got {0}")]
    TooFewBoxesPerColumn(usize),
    /// The home lane lives in column `n_columns - 2` and needs a track column before it
    #[error("(TooFewColumns) a sector needs at least 3 columns, got {0}")]
    TooFewColumns(usize),
    /// Wedge angle must stay positive and every sector needs a palette colour
    #[error("(PlayerCount) player count must be within [{min}, {max}], got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },
    /// The margin eats the whole board
    #[error("(MarginTooLarge) margin {margin} must be smaller than half the board size {board_size}")]
    MarginTooLarge { margin: Real, board_size: Real },
    /// A length that has to be strictly positive and finite
    #[error("(NonPositive) {name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: Real },
    /// A length that may be zero but not negative
    #[error("(Negative) {name} must not be negative, got {value}")]
    Negative { name: &'static str, value: Real },
    /// Icosphere count outside the accepted range
    #[error("(RingCount) icosphere count must be within [{min}, {max}], got {got}")]
    RingCount { got: usize, min: usize, max: usize },
    /// Ring radius outside the accepted range
    #[error("(RingRadius) ring radius must be within [{min}, {max}], got {got}")]
    RingRadius { got: Real, min: Real, max: Real },
    /// The scene host cannot accept new objects
    #[error("(NoActiveScene) the scene has no active object to attach to")]
    NoActiveScene,
    /// Length unit not recognised
    #[error("(UnknownUnit) unknown length unit '{0}'")]
    UnknownUnit(String),
    /// Colour string not recognised
    #[error("(InvalidColor) cannot parse colour '{0}'")]
    InvalidColor(String),
}
