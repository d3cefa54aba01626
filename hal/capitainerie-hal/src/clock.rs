//! Wall-clock time source
//!
//! The weather page shows the local time of day. Only hours and minutes are
//! exposed; the date never reaches the screen.

use core::fmt;

/// Time of day in the station's local time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl LocalTime {
    /// Midnight, the power-on value of an unset RTC
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time of day, rejecting out-of-range fields
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }
}

/// Formats as zero-padded `HH:MM`
impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Source of the current local time
pub trait WallClock {
    /// Error type for clock reads
    type Error;

    /// Read the current local time of day
    fn now(&mut self) -> Result<LocalTime, Self::Error>;
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_zero_padded_format() {
        assert_eq!(LocalTime::new(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(LocalTime::new(23, 59).unwrap().to_string(), "23:59");
        assert_eq!(LocalTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_rejects_invalid_fields() {
        assert!(LocalTime::new(24, 0).is_none());
        assert!(LocalTime::new(12, 60).is_none());
    }
}
