//! Length units accepted for board size and margin.

use crate::errors::ValidationError;
use crate::float_types::{CM, INCH, MM, PC, PT, PX, Real};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Px,
    #[default]
    Mm,
    Cm,
    In,
    Pt,
    Pc,
}

impl Units {
    /// How many SVG user units one of this unit spans.
    pub const fn factor(self) -> Real {
        match self {
            Units::Px => PX,
            Units::Mm => MM,
            Units::Cm => CM,
            Units::In => INCH,
            Units::Pt => PT,
            Units::Pc => PC,
        }
    }

    /// Convert `value` expressed in this unit to SVG user units.
    ///
    /// ```
    /// # use shapegen::units::Units;
    /// assert_eq!(Units::In.to_user_units(2.0), 192.0);
    /// ```
    pub fn to_user_units(self, value: Real) -> Real {
        value * self.factor()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Units::Px => "px",
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::In => "in",
            Units::Pt => "pt",
            Units::Pc => "pc",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "px" | "" => Ok(Units::Px),
            "mm" => Ok(Units::Mm),
            "cm" => Ok(Units::Cm),
            "in" | "inch" => Ok(Units::In),
            "pt" => Ok(Units::Pt),
            "pc" => Ok(Units::Pc),
            other => Err(ValidationError::UnknownUnit(other.to_string())),
        }
    }
}
