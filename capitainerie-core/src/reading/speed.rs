//! Anemometer values
//!
//! The anemometer register holds the speed in tenths of a metre per second.
//! Keeping it as an integer count of tenths avoids float formatting on the
//! target and prints exactly what the sensor reported.

use core::fmt::{self, Write};

use heapless::String;

use super::Reading;

/// Capacity of [`SpeedText`]
pub const SPEED_TEXT_LEN: usize = 8;

// Longest possible value is u16::MAX tenths
const _: () = assert!("6553.5".len() <= SPEED_TEXT_LEN);

/// Formatted speed, e.g. `"12.3"`
pub type SpeedText = String<SPEED_TEXT_LEN>;

/// Wind speed with 0.1 m/s resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindSpeed {
    tenths: u16,
}

impl WindSpeed {
    pub const ZERO: Self = Self { tenths: 0 };

    pub const fn from_tenths(tenths: u16) -> Self {
        Self { tenths }
    }

    /// Present readings only; `None` stays distinguishable from calm air
    pub fn from_reading(reading: Reading) -> Option<Self> {
        reading.map(Self::from_tenths)
    }

    pub const fn tenths(&self) -> u16 {
        self.tenths
    }

    /// Speed in m/s
    ///
    /// Integer tenths divided by ten is already the value rounded to two
    /// decimals, so no further rounding is applied.
    pub fn metres_per_second(&self) -> f32 {
        self.tenths as f32 / 10.0
    }
}

/// Formats as `<whole>.<tenth>`, always one decimal
impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// Speed in m/s for a reading, `0.0` when absent
///
/// An absent reading and a calm 0.0 m/s are indistinguishable here; use
/// [`WindSpeed::from_reading`] where the difference matters.
pub fn speed_value(reading: Reading) -> f32 {
    WindSpeed::from_reading(reading)
        .map(|speed| speed.metres_per_second())
        .unwrap_or(0.0)
}

/// Display text for a reading, `"0.0"` when absent
pub fn speed_text(reading: Reading) -> SpeedText {
    let speed = WindSpeed::from_reading(reading).unwrap_or(WindSpeed::ZERO);
    let mut text = SpeedText::new();
    // Cannot overflow, see SPEED_TEXT_LEN
    write!(text, "{}", speed).ok();
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scaled_value() {
        assert_eq!(speed_value(Some(123)), 12.3);
        assert_eq!(speed_value(Some(5)), 0.5);
        assert_eq!(speed_value(Some(10)), 1.0);
    }

    #[test]
    fn test_absent_and_zero_collide() {
        assert_eq!(speed_value(None), 0.0);
        assert_eq!(speed_value(Some(0)), 0.0);
        assert_ne!(
            WindSpeed::from_reading(None),
            WindSpeed::from_reading(Some(0))
        );
    }

    #[test]
    fn test_speed_text() {
        assert_eq!(speed_text(Some(123)).as_str(), "12.3");
        assert_eq!(speed_text(Some(7)).as_str(), "0.7");
        assert_eq!(speed_text(Some(0)).as_str(), "0.0");
        assert_eq!(speed_text(None).as_str(), "0.0");
        assert_eq!(speed_text(Some(u16::MAX)).as_str(), "6553.5");
    }

    proptest! {
        #[test]
        fn prop_text_matches_value(tenths in any::<u16>()) {
            let text = speed_text(Some(tenths));
            let parsed: f32 = text.as_str().parse().unwrap();
            prop_assert_eq!(parsed, speed_value(Some(tenths)));
        }
    }
}
