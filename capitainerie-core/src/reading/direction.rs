//! Wind vane codes
//!
//! The vane reports one of eight sectors, clockwise from north.

use super::Reading;

/// Label for a code outside the eight sectors
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Label shown when the vane did not answer
pub const ERROR_LABEL: &str = "Error";

/// One of the eight compass sectors reported by the vane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    /// All sectors in code order
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::NorthEast,
        CompassPoint::East,
        CompassPoint::SouthEast,
        CompassPoint::South,
        CompassPoint::SouthWest,
        CompassPoint::West,
        CompassPoint::NorthWest,
    ];

    /// Map a vane code to its sector
    ///
    /// Codes outside 0-7 are not folded back into range; they return `None`.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Register value for this sector
    pub const fn code(self) -> u16 {
        self as u16
    }

    pub const fn label(self) -> &'static str {
        match self {
            CompassPoint::North => "North",
            CompassPoint::NorthEast => "North-East",
            CompassPoint::East => "East",
            CompassPoint::SouthEast => "South-East",
            CompassPoint::South => "South",
            CompassPoint::SouthWest => "South-West",
            CompassPoint::West => "West",
            CompassPoint::NorthWest => "North-West",
        }
    }
}

/// Text for a direction reading
///
/// - `Some(0..=7)`: the sector label
/// - `Some(other)`: [`UNKNOWN_LABEL`]
/// - `None`: [`ERROR_LABEL`]
pub fn direction_label(reading: Reading) -> &'static str {
    match reading {
        Some(code) => CompassPoint::from_code(code)
            .map(CompassPoint::label)
            .unwrap_or(UNKNOWN_LABEL),
        None => ERROR_LABEL,
    }
}
