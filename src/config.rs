//! Optional TOML configuration.
//!
//! ```toml
//! [board]
//! units = "cm"
//! board_size = 40.0
//! n_players = 6
//! fill_color = "#F5F0E1"
//!
//! [ring]
//! count = 12
//! radius = 8.0
//! ```
//!
//! Every field is optional; missing ones take the generator defaults.

use crate::board::BoardOptions;
use crate::io::IoError;
use crate::ring::RingOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardOptions,
    pub ring: RingOptions,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, IoError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, IoError> {
        toml::to_string(self).map_err(|e| IoError::MalformedInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Paint;
    use crate::units::Units;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r##"
            [board]
            units = "in"
            n_players = 6
            fill_color = "#102030"

            [ring]
            count = 12
            "##,
        )
        .unwrap();
        assert_eq!(config.board.units, Units::In);
        assert_eq!(config.board.n_players, 6);
        assert_eq!(config.board.fill_color, Paint::Rgb([0x10, 0x20, 0x30]));
        assert_eq!(config.board.n_columns, BoardOptions::default().n_columns);
        assert_eq!(config.ring.count, 12);
        assert_eq!(config.ring.radius, RingOptions::default().radius);
    }

    #[test]
    fn picker_integer_colour() {
        let config = Config::from_toml_str("[board]\nfill_color = -16776961\n").unwrap();
        assert_eq!(config.board.fill_color, Paint::Rgb([0xFF, 0, 0]));
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Config::from_toml_str("[board]\nunits = \"furlong\"\n").is_err());
    }

    #[test]
    fn defaults_survive_a_round_trip() {
        let text = Config::default().to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
