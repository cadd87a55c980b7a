//! Stroke/fill styling of 2D primitives and the board palette.

use crate::errors::ValidationError;
use crate::float_types::Real;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A paint server as far as this crate cares: nothing, a CSS colour keyword, or RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    None,
    Named(&'static str),
    Rgb([u8; 3]),
}

impl Paint {
    pub const BLACK: Paint = Paint::Named("black");
    pub const WHITE: Paint = Paint::Named("white");
    pub const GRAY: Paint = Paint::Named("gray");
    pub const RED: Paint = Paint::Named("red");

    /// Build a paint from a host colour-picker value.
    ///
    /// Pickers hand out RGBA packed in a signed 32-bit integer: negative values are
    /// reinterpreted as unsigned and the alpha byte is dropped.
    ///
    /// ```
    /// # use shapegen::style::Paint;
    /// assert_eq!(Paint::from_rgba_int(-16776961).to_string(), "#FF0000");
    /// assert_eq!(Paint::from_rgba_int(0x0000ffff).to_string(), "#0000FF");
    /// ```
    pub const fn from_rgba_int(value: i64) -> Paint {
        let rgba = (value as u64) & 0xFFFF_FFFF;
        let [_, _, _, _, r, g, b, _] = rgba.to_be_bytes();
        Paint::Rgb([r, g, b])
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Paint::None)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::None => f.write_str("none"),
            Paint::Named(name) => f.write_str(name),
            Paint::Rgb([r, g, b]) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

impl FromStr for Paint {
    type Err = ValidationError;

    /// Accepts `none`, `#RRGGBB`, `#RGB`, a palette keyword, or a packed RGBA integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidColor(s.to_string());

        if s.eq_ignore_ascii_case("none") {
            return Ok(Paint::None);
        }
        if let Some(hex) = s.strip_prefix('#') {
            let digits = match hex.len() {
                6 => hex.to_string(),
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                _ => return Err(invalid()),
            };
            let packed = u32::from_str_radix(&digits, 16).map_err(|_| invalid())?;
            let [_, r, g, b] = packed.to_be_bytes();
            return Ok(Paint::Rgb([r, g, b]));
        }
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Paint::from_rgba_int(value));
        }
        KNOWN_KEYWORDS
            .iter()
            .copied()
            .find(|k| k.eq_ignore_ascii_case(s))
            .map(Paint::Named)
            .ok_or_else(invalid)
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Ok(Paint::from_rgba_int(value)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Sector colours, in seating order.
pub const SECTOR_COLORS: [Paint; 8] = [
    Paint::Named("yellow"),
    Paint::Named("royalblue"),
    Paint::Named("red"),
    Paint::Named("green"),
    Paint::Named("orange"),
    Paint::Named("hotpink"),
    Paint::Named("gold"),
    Paint::Named("darkkhaki"),
];

const KNOWN_KEYWORDS: [&str; 11] = [
    "black", "white", "gray", "yellow", "royalblue", "red", "green", "orange", "hotpink", "gold",
    "darkkhaki",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: Paint,
    pub stroke_width: Real,
    pub fill: Paint,
}

impl Style {
    pub const fn new(stroke: Paint, stroke_width: Real, fill: Paint) -> Self {
        Self { stroke, stroke_width, fill }
    }

    /// Stroke only, as used for grid lines.
    pub const fn stroke_only(stroke: Paint, stroke_width: Real) -> Self {
        Self::new(stroke, stroke_width, Paint::None)
    }

    /// CSS declaration list for an SVG `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "stroke:{};stroke-width:{};fill:{}",
            self.stroke, self.stroke_width, self.fill
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_keywords() {
        assert_eq!("#0a0B0c".parse::<Paint>().unwrap(), Paint::Rgb([10, 11, 12]));
        assert_eq!("#fff".parse::<Paint>().unwrap(), Paint::Rgb([255, 255, 255]));
        assert_eq!("RoyalBlue".parse::<Paint>().unwrap(), Paint::Named("royalblue"));
        assert_eq!("none".parse::<Paint>().unwrap(), Paint::None);
        assert!("#12345".parse::<Paint>().is_err());
        assert!("chartreuse-ish".parse::<Paint>().is_err());
    }

    #[test]
    fn rgba_int_keeps_leading_zeros() {
        assert_eq!(Paint::from_rgba_int(0x000000ff).to_string(), "#000000");
        assert_eq!(Paint::from_rgba_int(0x00ff00ff).to_string(), "#00FF00");
        assert_eq!(Paint::from_rgba_int(-1).to_string(), "#FFFFFF");
    }
}
