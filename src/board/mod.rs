//! Parchís board generator.
//!
//! A board is `n_players` congruent wedge-shaped sectors arranged around the
//! board centre, fitted inside a square border. Each sector is described in a
//! canonical frame first ([`sector::generate_sector`]) and only scaled to the
//! requested board size once all of them are assembled ([`generate_sectors`]).

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::host::{DocumentHost, HostError};
use crate::sketch::{Group, Shape};
use crate::style::{Paint, SECTOR_COLORS, Style};
use crate::traits::TransformOps;
use crate::units::Units;
use serde::{Deserialize, Serialize};

pub mod numbering;
pub mod sector;
pub mod topology;

pub use numbering::{NumberLabel, first_number, number_labels, numbers_per_sector};
pub use sector::{SectorContext, SectorGeometry, generate_sector};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = SECTOR_COLORS.len();
pub const MIN_COLUMNS: usize = 3;
pub const MIN_BOXES_PER_COLUMN: usize = topology::SECURE_ROW + 1;

/// Everything the user can choose about a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardOptions {
    /// Unit of `board_size` and `board_margin`
    pub units: Units,
    pub board_size: Real,
    pub board_margin: Real,
    /// Stroke width in SVG user units
    pub stroke_width: Real,
    pub n_players: usize,
    pub n_columns: usize,
    pub n_boxes_per_column: usize,
    /// Fill the triangle between each sector and the board centre
    pub generate_center: bool,
    /// Number the track boxes
    pub generate_numbers: bool,
    /// Border fill
    pub fill_color: Paint,
    /// Laser-cut output: no fills, cutting colours for strokes
    pub use_laser: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            units: Units::Cm,
            board_size: 40.0,
            board_margin: 1.0,
            stroke_width: 1.0,
            n_players: 4,
            n_columns: 3,
            n_boxes_per_column: 8,
            generate_center: true,
            generate_numbers: true,
            fill_color: Paint::WHITE,
            use_laser: false,
        }
    }
}

impl BoardOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.board_size.is_finite() && self.board_size > 0.0) {
            return Err(ValidationError::NonPositive { name: "board size", value: self.board_size });
        }
        if !self.board_margin.is_finite() || self.board_margin < 0.0 {
            return Err(ValidationError::Negative { name: "board margin", value: self.board_margin });
        }
        if self.board_margin >= self.board_size / 2.0 {
            return Err(ValidationError::MarginTooLarge {
                margin: self.board_margin,
                board_size: self.board_size,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ValidationError::Negative { name: "stroke width", value: self.stroke_width });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.n_players) {
            return Err(ValidationError::PlayerCount {
                got: self.n_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.n_columns < MIN_COLUMNS {
            return Err(ValidationError::TooFewColumns(self.n_columns));
        }
        if self.n_boxes_per_column < MIN_BOXES_PER_COLUMN {
            return Err(ValidationError::TooFewBoxesPerColumn(self.n_boxes_per_column));
        }
        Ok(())
    }

    /// Board side in SVG user units.
    pub fn board_size_user_units(&self) -> Real {
        self.units.to_user_units(self.board_size)
    }

    /// Margin in SVG user units.
    pub fn board_margin_user_units(&self) -> Real {
        self.units.to_user_units(self.board_margin)
    }

    /// Number font size: half the board size as typed, without unit conversion.
    pub fn font_size(&self) -> Real {
        self.board_size * 0.5
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.use_laser, self.fill_color)
    }
}

/// Colours that depend only on the output mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub laser: bool,
    pub sector_stroke: Paint,
    pub board_stroke: Paint,
    /// Plain track boxes
    pub regular_fill: Paint,
    /// Secure boxes that are not part of the home area
    pub secure_fill: Paint,
    pub border_fill: Paint,
}

impl Palette {
    pub const fn new(laser: bool, fill_color: Paint) -> Self {
        if laser {
            Self {
                laser,
                sector_stroke: Paint::RED,
                board_stroke: Paint::BLACK,
                regular_fill: Paint::None,
                secure_fill: Paint::GRAY,
                border_fill: Paint::None,
            }
        } else {
            Self {
                laser,
                sector_stroke: Paint::BLACK,
                board_stroke: Paint::GRAY,
                regular_fill: Paint::WHITE,
                secure_fill: Paint::GRAY,
                border_fill: fill_color,
            }
        }
    }

    /// Fill of a box: nothing when cutting, the owner's colour in the home area,
    /// `other` elsewhere.
    pub const fn box_fill(&self, is_home_box: bool, sector_color: Paint, other: Paint) -> Paint {
        if self.laser {
            Paint::None
        } else if is_home_box {
            sector_color
        } else {
            other
        }
    }
}

/// Colour of sector `index` (0-based, seating order).
pub fn sector_color(index: usize) -> Paint {
    SECTOR_COLORS[index % SECTOR_COLORS.len()]
}

/// All sectors, fitted into `[margin, size - margin]` on both axes.
pub fn generate_sectors(options: &BoardOptions) -> Result<Group, ValidationError> {
    options.validate()?;

    let size = options.board_size_user_units();
    let margin = options.board_margin_user_units();
    let geometry = SectorGeometry::new(
        options.n_boxes_per_column,
        options.n_columns,
        size,
        options.n_players,
    );

    let mut sectors = Group::new("sectors");
    for index in 0..options.n_players {
        let ctx = SectorContext::new(geometry, index, options);
        sectors.add(generate_sector(&ctx));
    }

    let Some(bounds) = sectors.bounding_rect() else {
        return Ok(sectors);
    };
    let (min, width, height) = (bounds.min(), bounds.width(), bounds.height());
    if width <= 0.0 || height <= 0.0 {
        log::warn!("sectors have a degenerate extent {width}x{height}, skipping fit");
        return Ok(sectors);
    }

    let size_minus_margin = size - 2.0 * margin;
    let scale_x = size_minus_margin / width;
    let scale_y = size_minus_margin / height;
    let translate_x = -min.x + margin / scale_x;
    let translate_y = -min.y + margin / scale_y;
    log::debug!(
        "fitting {width:.3}x{height:.3} sectors into {size_minus_margin:.3}: scale ({scale_x:.5}, {scale_y:.5})"
    );

    Ok(sectors
        .translate(translate_x, translate_y, 0.0)
        .scale(scale_x, scale_y, 1.0))
}

/// The whole board: a border square with the fitted sectors above it.
///
/// ```
/// # use shapegen::board::{BoardOptions, generate_board};
/// let board = generate_board(&BoardOptions::default()).unwrap();
/// assert_eq!(board.label, "board");
/// assert!(board.find_shape("border").is_some());
/// assert!(board.find_group("sector-4").is_some());
/// ```
pub fn generate_board(options: &BoardOptions) -> Result<Group, ValidationError> {
    options.validate()?;
    let size = options.board_size_user_units();
    let palette = options.palette();
    log::info!(
        "generating {}-player board, {} {} wide{}",
        options.n_players,
        options.board_size,
        options.units,
        if options.use_laser { " (laser)" } else { "" }
    );

    let border = Shape::rectangle(
        0.0,
        0.0,
        size,
        size,
        Style::new(palette.board_stroke, options.stroke_width, palette.border_fill),
        "border",
    );

    let sectors = generate_sectors(options)?;
    Ok(Group::new("board").with(border).with(sectors))
}

/// Generate the board and hand it to `host`.
pub fn emit_board<H: DocumentHost>(
    host: &mut H,
    options: &BoardOptions,
) -> Result<Group, HostError<H::Error>> {
    let board = generate_board(options)?;
    host.add_group(&board).map_err(HostError::Host)?;
    Ok(board)
}
